pub mod catalog;
pub mod errors;
pub mod invoice;

pub use errors::ApiError;
