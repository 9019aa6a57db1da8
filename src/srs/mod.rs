pub mod due;
pub mod key;
pub mod repository;
pub mod scheduler;
pub mod status;

pub use due::{due_count, due_count_from_store, due_queue, DueItem};
pub use key::{ItemKey, KeyError};
pub use repository::SrsRepository;
pub use scheduler::{apply_review, interval_days, ReviewOutcome};
pub use status::{SrsData, SrsStatus};
