use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::services::progress::progress_report;
use crate::srs::{due_count, SrsRepository};

/// Figures shown on the dashboard, computed in a single store read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub lesson_progress: BTreeMap<String, u8>,
    pub total_progress: u8,
    pub due_count: usize,
}

impl DashboardSummary {
    /// Never fails: an unreadable store yields an all-zero summary.
    pub fn compute(repo: &SrsRepository, catalog: &Catalog, now_ms: u64) -> Self {
        let data = match repo.load() {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(error = %err, "srs data unreadable, dashboard falls back to zero");
                return Self::empty(catalog);
            }
        };

        let report = progress_report(&data, catalog);
        Self {
            lesson_progress: report.lessons,
            total_progress: report.total,
            due_count: due_count(&data, catalog, now_ms),
        }
    }

    fn empty(catalog: &Catalog) -> Self {
        Self {
            lesson_progress: catalog
                .lessons()
                .iter()
                .map(|l| (l.id.clone(), 0))
                .collect(),
            total_progress: 0,
            due_count: 0,
        }
    }

    pub fn review_prompt(&self) -> String {
        if self.due_count > 0 {
            format!("您有 {} 个单词/语法需要复习。", self.due_count)
        } else {
            "目前没有待复习的内容，去学点新词吧！".to_string()
        }
    }
}
