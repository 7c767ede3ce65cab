//! Backend access layer.
//!
//! Repositories translate domain operations into PostgREST requests issued through a shared
//! [`PostgrestClient`]. No business rules live here: validation, confirmation and cache
//! invalidation belong to the service layer.

pub mod client;
pub mod make;
pub mod model;
pub mod normalize;
pub mod query;

pub use client::PostgrestClient;
pub use make::MakeRepository;
pub use model::ModelRepository;
