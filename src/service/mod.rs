//! Service layer.
//!
//! Coordinates the data layer with client-side concerns: list state persistence, list result
//! memoization, validation, delete confirmation and cache invalidation after mutations.

pub mod cache;
pub mod list;
pub mod mutation;
pub mod state;

pub use cache::ListCache;
pub use list::ListService;
pub use mutation::{Confirm, MutationDispatcher, MutationOutcome, MutationState};
pub use state::{ListStateStore, MemoryStorage, StateStorage};
