//! Client-side core for an invoice administration UI.
//!
//! The domain layer models the editable invoice draft: an ordered line-item
//! collection with derived totals and field-level validation, plus the
//! repository ports the draft submits through. The infrastructure layer
//! implements those ports against the remote REST API (invoices, products,
//! clients) and owns configuration and telemetry. The application layer
//! wires the two into the user flows a UI triggers: open the form, save,
//! list, delete.
//!
//! The interactive shell (routing, tables, notifications) is expected to be
//! a thin renderer over these types; nothing here depends on a UI toolkit.

pub mod application;
pub mod domain;
pub mod infrastructure;
