use crate::catalog::Catalog;
use crate::srs::{ItemKey, SrsData, SrsRepository, SrsStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueItem {
    pub key: ItemKey,
    pub streak: u32,
    pub next_review: u64,
}

/// Number of entries that are learned, past due and still in the catalog.
pub fn due_count(data: &SrsData, catalog: &Catalog, now_ms: u64) -> usize {
    data.values()
        .filter(|status| status.is_due(catalog, now_ms))
        .count()
}

/// Due entries, most overdue first.
pub fn due_queue(data: &SrsData, catalog: &Catalog, now_ms: u64) -> Vec<DueItem> {
    let mut queue: Vec<DueItem> = data
        .values()
        .filter(|status| status.is_learned() && status.next_review <= now_ms)
        .filter_map(|status| to_due_item(status, catalog))
        .collect();
    queue.sort_by(|a, b| {
        a.next_review
            .cmp(&b.next_review)
            .then_with(|| a.key.cmp(&b.key))
    });
    queue
}

/// Due count read straight from the repository. Any read failure counts as
/// nothing due so the caller can keep rendering.
pub fn due_count_from_store(repo: &SrsRepository, catalog: &Catalog, now_ms: u64) -> usize {
    match repo.load() {
        Ok(data) => due_count(&data, catalog, now_ms),
        Err(err) => {
            tracing::warn!(error = %err, "srs data unreadable, reporting no due items");
            0
        }
    }
}

fn to_due_item(status: &SrsStatus, catalog: &Catalog) -> Option<DueItem> {
    status.valid_key(catalog).map(|key| DueItem {
        key,
        streak: status.streak,
        next_review: status.next_review,
    })
}
