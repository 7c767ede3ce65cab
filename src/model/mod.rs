pub mod api;
pub mod list;
pub mod vehicle;
