pub mod browser;
pub mod form;
