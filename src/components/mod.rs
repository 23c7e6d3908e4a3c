//! UI Components
//!
//! Leptos components for the checklist page.

mod date_header;
mod email_form;
mod note_modal;
mod progress_bar;
mod task_table;
mod toast_host;

pub use date_header::DateHeader;
pub use email_form::EmailForm;
pub use note_modal::NoteModal;
pub use progress_bar::ProgressBar;
pub use task_table::TaskTable;
pub use toast_host::ToastHost;
