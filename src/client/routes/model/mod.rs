pub mod create;
pub mod edit;
pub mod form;
pub mod list;

pub use create::ModelCreate;
pub use edit::ModelEdit;
pub use list::ModelList;
