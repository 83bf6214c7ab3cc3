//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_member--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records with its create/edit form
pub const PAGE_CAT_LIST: &str = "list";

/// Overview / summary view
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
