//! Browser integrations: `localStorage` for list state, and the native confirm and alert
//! dialogs. Builds without the `web` feature fall back to in-memory storage and logging.

use std::rc::Rc;

use dioxus_logger::tracing;

use crate::service::{Confirm, MemoryStorage, StateStorage};

#[cfg(feature = "web")]
pub use web::BrowserStorage;

/// Storage backing the list state stores
///
/// Falls back to in-memory storage when `localStorage` is unavailable, list state then lasts
/// until the page is reloaded.
pub fn state_storage() -> Rc<dyn StateStorage> {
    #[cfg(feature = "web")]
    match BrowserStorage::new() {
        Ok(storage) => return Rc::new(storage),
        Err(err) => tracing::warn!("{}, list state will not persist", err),
    }

    Rc::new(MemoryStorage::new())
}

/// Delete confirmation through the browser's native confirm dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogConfirm;

impl Confirm for DialogConfirm {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "web")]
        {
            web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false)
        }

        #[cfg(not(feature = "web"))]
        {
            tracing::warn!("No dialog available, declining: {}", message);
            false
        }
    }
}

/// Shows a blocking alert with the given message
pub fn alert(message: &str) {
    #[cfg(feature = "web")]
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_ok() {
            return;
        }
    }

    tracing::error!("{}", message);
}

#[cfg(feature = "web")]
mod web {
    use crate::{error::storage::StorageError, service::StateStorage};

    /// [`StateStorage`] over `window.localStorage`.
    pub struct BrowserStorage {
        storage: web_sys::Storage,
    }

    impl BrowserStorage {
        pub fn new() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no browser window".to_string()))?;

            let storage = window
                .local_storage()
                .map_err(|_| StorageError::Unavailable("localStorage access denied".to_string()))?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;

            Ok(Self { storage })
        }
    }

    impl StateStorage for BrowserStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage
                .get_item(key)
                .map_err(|_| StorageError::Unavailable(format!("failed to read {}", key)))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|_| StorageError::Unavailable(format!("failed to write {}", key)))
        }
    }
}
