pub mod delete_invoice;
pub mod list_invoices;
pub mod open_invoice_form;
pub mod save_invoice;

pub use delete_invoice::DeleteInvoiceUseCase;
pub use list_invoices::ListInvoicesUseCase;
pub use open_invoice_form::{InvoiceForm, OpenInvoiceFormUseCase};
pub use save_invoice::{SaveInvoiceError, SaveInvoiceUseCase};
