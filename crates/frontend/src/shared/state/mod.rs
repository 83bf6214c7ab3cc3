pub mod portal_store;

pub use portal_store::PortalStore;
