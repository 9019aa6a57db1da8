//! Review state repository
//!
//! All statuses are read and written as one JSON value under
//! `nihongo_srs_data`.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::srs::scheduler::{apply_review, ReviewOutcome};
use crate::srs::{ItemKey, SrsData, SrsStatus};
use crate::storage::keys::SRS_DATA_KEY;
use crate::storage::{KeyValueStore, StoreError, StoreResult};

/// Reads and writes the SRS map through a `KeyValueStore`
#[derive(Clone)]
pub struct SrsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SrsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Whole SRS map
    ///
    /// An absent key is an empty map. Unparseable content is
    /// `StoreError::Corrupt`.
    pub fn load(&self) -> StoreResult<SrsData> {
        let Some(raw) = self.store.get(SRS_DATA_KEY)? else {
            return Ok(SrsData::new());
        };
        serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            key: SRS_DATA_KEY.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn save(&self, data: &SrsData) -> StoreResult<()> {
        let raw = serde_json::to_string(data)?;
        self.store.set(SRS_DATA_KEY, &raw)
    }

    /// `None` means the item was never reviewed.
    pub fn status(&self, key: &ItemKey) -> StoreResult<Option<SrsStatus>> {
        Ok(self.load()?.remove(&key.storage_key()))
    }

    /// Apply one review outcome and persist it
    ///
    /// # Returns
    /// * `SrsStatus` - the updated status
    pub fn record_review(
        &self,
        key: &ItemKey,
        outcome: ReviewOutcome,
        now_ms: u64,
    ) -> StoreResult<SrsStatus> {
        let mut data = self.load()?;
        let storage_key = key.storage_key();
        let next = apply_review(data.get(&storage_key), key, outcome, now_ms);
        data.insert(storage_key, next.clone());
        self.save(&data)?;

        tracing::debug!(item = %key, ?outcome, streak = next.streak, "review recorded");
        Ok(next)
    }

    /// Drop statuses whose item is no longer in the catalog
    ///
    /// Reads never prune; only this call does.
    ///
    /// # Returns
    /// * `usize` - number of entries removed
    pub fn prune_stale(&self, catalog: &Catalog) -> StoreResult<usize> {
        let mut data = self.load()?;
        let before = data.len();
        data.retain(|_, status| status.valid_key(catalog).is_some());
        let removed = before - data.len();

        if removed > 0 {
            self.save(&data)?;
            tracing::info!(removed, "pruned stale srs entries");
        }
        Ok(removed)
    }
}
