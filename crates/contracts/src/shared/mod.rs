pub mod form;
pub mod metadata;
pub mod record_list;
