pub mod create;
pub mod edit;
pub mod form;
pub mod list;

pub use create::MakeCreate;
pub use edit::MakeEdit;
pub use list::MakeList;
