pub mod home;
pub mod make;
pub mod model;
pub mod not_found;

pub use home::Home;
pub use not_found::NotFound;
