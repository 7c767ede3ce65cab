pub mod entity_table;
pub mod filter_control;
pub mod form;
pub mod navbar;
pub mod page;
pub mod pagination;
pub mod select;
pub mod title;

pub use entity_table::{EntityTable, TableRow};
pub use filter_control::FilterControl;
pub use form::{SelectField, TextField};
pub use navbar::Navbar;
pub use page::Page;
pub use pagination::Pagination;
pub use select::{SelectOption, SortControls};
pub use title::TitleButton;
