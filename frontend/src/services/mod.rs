pub mod api;
pub mod format;
