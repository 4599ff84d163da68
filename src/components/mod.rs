//! UI Components
//!
//! Leptos components of the records screen.

mod delete_confirm_button;
mod record_form;
mod records_table;
mod status_banner;

pub use delete_confirm_button::DeleteConfirmButton;
pub use record_form::RecordForm;
pub use records_table::RecordsTable;
pub use status_banner::StatusBanner;
