pub mod catalog;
pub mod config;
pub mod llm;
pub mod logging;
pub mod services;
pub mod srs;
pub mod storage;

pub use catalog::{Catalog, GrammarRule, Lesson, VocabularyEntry};
pub use config::{AiConfig, Endpoints, ProviderKind};
pub use llm::tutor::TutorService;
pub use services::dashboard::DashboardSummary;
pub use srs::{ItemKey, ReviewOutcome, SrsData, SrsRepository, SrsStatus};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Current wall-clock time in epoch milliseconds, the unit every `next_review` uses.
pub fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
