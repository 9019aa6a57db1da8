use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::srs::ItemKey;

/// Review state of a single item, in the shape the front end stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrsStatus {
    pub id: String,
    pub streak: u32,
    /// Epoch milliseconds.
    pub next_review: u64,
}

impl SrsStatus {
    pub fn new(key: &ItemKey, streak: u32, next_review: u64) -> Self {
        Self {
            id: key.storage_key(),
            streak,
            next_review,
        }
    }

    /// Typed key of the referenced item; `None` for ids with no recognised kind.
    pub fn item_key(&self) -> Option<ItemKey> {
        self.id.parse().ok()
    }

    /// Resolved key, but only while the referenced item is still in `catalog`.
    pub fn valid_key(&self, catalog: &Catalog) -> Option<ItemKey> {
        self.item_key().filter(|key| catalog.contains(key))
    }

    pub fn is_learned(&self) -> bool {
        self.streak > 0
    }

    pub fn is_due(&self, catalog: &Catalog, now_ms: u64) -> bool {
        self.is_learned() && self.next_review <= now_ms && self.valid_key(catalog).is_some()
    }
}

/// Persisted mapping from storage key to status.
pub type SrsData = BTreeMap<String, SrsStatus>;
