//! Favorite cities persisted as a JSON array under a fixed storage key

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::storage::{LocalStorage, StorageError};

pub const FAVORITES_KEY: &str = "favoriteCities";

/// Read the stored favorites.
///
/// Absent, unreadable or malformed values all yield an empty list.
pub fn load(storage: &dyn LocalStorage) -> Vec<String> {
    let raw = match storage.get_item(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("no stored favorites");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not read favorites");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(cities) => {
            tracing::info!(count = cities.len(), "loaded favorites");
            cities
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored favorites are not a JSON string array");
            Vec::new()
        }
    }
}

/// Overwrite the stored favorites with `cities`
pub fn persist(storage: &dyn LocalStorage, cities: &[String]) -> Result<(), StorageError> {
    let json = serde_json::to_string(cities)?;
    storage.set_item(FAVORITES_KEY, &json)
}

/// Serializes favorites writes coming from concurrent tasks.
///
/// Every save takes a ticket when it is issued. Writes run one at a time,
/// and a ticket older than the last one written is dropped, so the stored
/// list always matches the newest save regardless of which task runs first.
pub struct FavoritesWriter {
    storage: Arc<dyn LocalStorage>,
    issued: AtomicU64,
    written: Mutex<u64>,
}

impl FavoritesWriter {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            storage,
            issued: AtomicU64::new(0),
            written: Mutex::new(0),
        }
    }

    /// Reserve the next write slot; call in the order saves are issued
    pub fn ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Persist `cities` for `ticket`. Returns `Ok(false)` when a newer list
    /// was already written and this one was skipped.
    pub fn write(&self, ticket: u64, cities: &[String]) -> Result<bool, StorageError> {
        let mut written = self
            .written
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if ticket <= *written {
            tracing::debug!(ticket, latest = *written, "skipping superseded favorites write");
            return Ok(false);
        }
        persist(self.storage.as_ref(), cities)?;
        *written = ticket;
        Ok(true)
    }
}
