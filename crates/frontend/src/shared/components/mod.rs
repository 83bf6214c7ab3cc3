pub mod page_header;
pub mod table_checkbox;

pub use page_header::PageHeader;
pub use table_checkbox::TableCheckbox;
