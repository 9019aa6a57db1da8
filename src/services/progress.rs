use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::catalog::Catalog;
use crate::srs::{ItemKey, SrsData};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub lessons: BTreeMap<String, u8>,
    pub total: u8,
}

pub fn lesson_progress(data: &SrsData, catalog: &Catalog, lesson_id: &str) -> u8 {
    let learned = learned_keys(data, catalog);
    percent_of(&catalog.lesson_items(lesson_id), &learned)
}

pub fn total_progress(data: &SrsData, catalog: &Catalog) -> u8 {
    let learned = learned_keys(data, catalog);
    percent_of(&catalog.all_items(), &learned)
}

pub fn progress_report(data: &SrsData, catalog: &Catalog) -> ProgressReport {
    let learned = learned_keys(data, catalog);
    let lessons = catalog
        .lessons()
        .iter()
        .map(|lesson| {
            let items = catalog.lesson_items(&lesson.id);
            (lesson.id.clone(), percent_of(&items, &learned))
        })
        .collect();

    ProgressReport {
        lessons,
        total: percent_of(&catalog.all_items(), &learned),
    }
}

// Stale keys drop out here, so they can never inflate a percentage.
fn learned_keys(data: &SrsData, catalog: &Catalog) -> HashSet<ItemKey> {
    data.values()
        .filter(|status| status.is_learned())
        .filter_map(|status| status.valid_key(catalog))
        .collect()
}

// Floored so 100 only appears once every item is learned.
fn percent_of(items: &[ItemKey], learned: &HashSet<ItemKey>) -> u8 {
    let unique: HashSet<&ItemKey> = items.iter().collect();
    if unique.is_empty() {
        return 0;
    }
    let done = unique.iter().filter(|key| learned.contains(**key)).count();
    (done * 100 / unique.len()) as u8
}
