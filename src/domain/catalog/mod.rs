pub mod entities;
pub mod ports;

pub use entities::{Client, Product};
pub use ports::{ClientRepository, ProductRepository};
