pub mod components;
pub mod config;
pub mod export;
pub mod form;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notify;
pub mod page_frame;
pub mod page_standard;
pub mod persisted_list;
pub mod record_page;
pub mod state;
pub mod storage;
pub mod theme;
