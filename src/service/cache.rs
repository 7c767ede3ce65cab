use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use crate::data::query::ListQuery;

/// Number of distinct queries kept per entity type.
pub const MAX_CACHED_QUERIES: usize = 16;

/// Memoized list responses of one entity type, keyed by the query that produced them.
///
/// Clones share the same entries so the list service and the mutation dispatcher see one
/// cache. Entries live until a mutation invalidates them or until more than
/// [`MAX_CACHED_QUERIES`] other queries have been used since.
///
/// Every invalidation starts a new generation. A fetch records the generation before it is
/// sent and hands it back to [`ListCache::insert`], so rows fetched before a mutation are
/// never stored after it.
#[derive(Debug)]
pub struct ListCache<T> {
    state: Rc<RefCell<CacheState<T>>>,
}

#[derive(Debug)]
struct CacheState<T> {
    entries: HashMap<ListQuery, Vec<T>>,
    // Least recently used first
    recency: VecDeque<ListQuery>,
    generation: u64,
    capacity: usize,
}

impl<T> CacheState<T> {
    fn touch(&mut self, query: &ListQuery) {
        if let Some(position) = self.recency.iter().position(|entry| entry == query) {
            if let Some(entry) = self.recency.remove(position) {
                self.recency.push_back(entry);
            }
        }
    }
}

impl<T> Clone for ListCache<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> Default for ListCache<T> {
    fn default() -> Self {
        Self::with_capacity(MAX_CACHED_QUERIES)
    }
}

impl<T> ListCache<T> {
    /// Creates an empty cache holding at most `capacity` queries, at least one
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Rc::new(RefCell::new(CacheState {
                entries: HashMap::new(),
                recency: VecDeque::new(),
                generation: 0,
                capacity: capacity.max(1),
            })),
        }
    }
}

impl<T: Clone> ListCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &ListQuery) -> Option<Vec<T>> {
        let mut state = self.state.borrow_mut();
        let rows = state.entries.get(query).cloned()?;
        state.touch(query);

        Some(rows)
    }

    /// Current generation, to be recorded before fetching
    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    /// Stores rows fetched during `generation`
    ///
    /// Returns `false` without storing anything when the cache was invalidated since.
    pub fn insert(&self, generation: u64, query: ListQuery, rows: Vec<T>) -> bool {
        let mut state = self.state.borrow_mut();

        if state.generation != generation {
            return false;
        }

        if state.entries.insert(query.clone(), rows).is_some() {
            state.touch(&query);
            return true;
        }

        state.recency.push_back(query);

        while state.recency.len() > state.capacity {
            if let Some(evicted) = state.recency.pop_front() {
                state.entries.remove(&evicted);
            }
        }

        true
    }

    /// Drops every cached response and starts a new generation
    pub fn invalidate(&self) {
        let mut state = self.state.borrow_mut();

        state.entries.clear();
        state.recency.clear();
        state.generation += 1;
    }

    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().entries.is_empty()
    }
}
