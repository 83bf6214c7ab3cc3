//! Generic list page of a record kind: searchable, sortable table with
//! reorder, bulk delete, CSV export and a create/edit form in a modal.

mod form;
mod list;
pub mod row;

pub use form::record_form_modal;
pub use list::record_list_page;
pub use row::{build_rows, RecordRow};

use contracts::domain::common::RecordId;

/// What the form modal of a list page shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(RecordId),
}

/// Browser confirmation dialog; false when it cannot be shown
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
