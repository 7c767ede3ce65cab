//! List state persistence.
//!
//! Each list keeps its sort, filter and pagination state under a fixed key so it survives a
//! full reload. Storage is injected through [`StateStorage`], the browser build plugs in
//! `localStorage` and tests use [`MemoryStorage`].

use std::{cell::RefCell, collections::HashMap, marker::PhantomData, rc::Rc};

use dioxus_logger::tracing;

use crate::{
    error::storage::StorageError,
    model::list::{
        Column, ListState, MakeFilterField, MakeSortField, ModelFilterField, ModelSortField,
        SortColumn, MAKE_LIST_STATE_KEY, MODEL_LIST_STATE_KEY,
    },
};

/// Key/value storage for serialized list state.
pub trait StateStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`StateStorage`], clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the [`ListState`] of one list.
///
/// Persistence failures never propagate: loading falls back to the default state and saving
/// logs a warning, the list keeps working with in-memory state either way.
pub struct ListStateStore<S, F> {
    storage: Rc<dyn StateStorage>,
    key: &'static str,
    _state: PhantomData<ListState<S, F>>,
}

pub type MakeListStore = ListStateStore<MakeSortField, MakeFilterField>;
pub type ModelListStore = ListStateStore<ModelSortField, ModelFilterField>;

impl<S, F> Clone for ListStateStore<S, F> {
    fn clone(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
            key: self.key,
            _state: PhantomData,
        }
    }
}

impl MakeListStore {
    pub fn for_makes(storage: Rc<dyn StateStorage>) -> Self {
        Self::new(storage, MAKE_LIST_STATE_KEY)
    }
}

impl ModelListStore {
    pub fn for_models(storage: Rc<dyn StateStorage>) -> Self {
        Self::new(storage, MODEL_LIST_STATE_KEY)
    }
}

impl<S: SortColumn, F: Column> ListStateStore<S, F> {
    /// Creates a new instance of [`ListStateStore`] persisting under `key`
    pub fn new(storage: Rc<dyn StateStorage>, key: &'static str) -> Self {
        Self {
            storage,
            key,
            _state: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Loads the persisted state, or the default state if none is stored or it is unreadable
    pub fn load(&self) -> ListState<S, F> {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => ListState::default(),
            Err(err) => {
                tracing::warn!("Falling back to default list state for {}: {}", self.key, err);
                ListState::default()
            }
        }
    }

    /// Saves the state, logging instead of failing when storage is unavailable
    pub fn save(&self, state: &ListState<S, F>) {
        if let Err(err) = self.try_save(state) {
            tracing::warn!("Failed to persist list state for {}: {}", self.key, err);
        }
    }

    pub fn try_load(&self) -> Result<Option<ListState<S, F>>, StorageError> {
        let Some(raw) = self.storage.get(self.key)? else {
            return Ok(None);
        };

        let state: ListState<S, F> = serde_json::from_str(&raw)?;

        Ok(Some(state.sanitized()))
    }

    pub fn try_save(&self, state: &ListState<S, F>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(state)?;

        self.storage.set(self.key, &raw)
    }
}
