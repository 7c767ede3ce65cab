//! Response normalizer for embedded one-to-one joins.
//!
//! Depending on the backend version an embedded parent row arrives as an array with zero or
//! one element, as an object, or as `null`. [`JoinValue`] accepts every shape and
//! [`normalize_join`] reduces it to a single optional value.

use serde::Deserialize;

/// Raw shape of an embedded join as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum JoinValue<T> {
    Many(Vec<T>),
    One(T),
}

/// Reduces a raw join to a single optional value.
///
/// Arrays yield their first element, or `None` when empty. Objects pass through and a
/// missing or `null` join yields `None`.
pub fn normalize_join<T>(raw: Option<JoinValue<T>>) -> Option<T> {
    match raw? {
        JoinValue::Many(values) => values.into_iter().next(),
        JoinValue::One(value) => Some(value),
    }
}
