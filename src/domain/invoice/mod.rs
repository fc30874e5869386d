pub mod draft;
pub mod entities;
pub mod errors;
pub mod ports;

pub use draft::{InvoiceDraft, LineItem, LineItems};
pub use entities::{Invoice, InvoiceItem};
pub use errors::{DraftError, FieldError, SubmitError};
pub use ports::InvoiceRepository;
