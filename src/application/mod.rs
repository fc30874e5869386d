pub mod client;
pub mod errors;
pub mod invoice;

pub use errors::UseCaseError;
