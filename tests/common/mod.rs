#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Router;
use parking_lot::Mutex;

use nihongo_srs::catalog::{Catalog, GrammarRule, Lesson, VocabularyEntry};
use nihongo_srs::srs::{ItemKey, SrsData, SrsStatus};

pub const NOW: u64 = 1_700_000_000_000;

pub fn sample_catalog() -> Catalog {
    let lesson = |id: &str, title: &str| Lesson {
        id: id.into(),
        title: title.into(),
        description: String::new(),
        topics: vec![],
    };
    let word = |w: &str, meaning: &str, lesson_id: &str| VocabularyEntry {
        word: w.into(),
        reading: w.into(),
        meaning: meaning.into(),
        lesson_id: lesson_id.into(),
    };
    let rule = |title: &str, lesson_id: &str| GrammarRule {
        title: title.into(),
        explanation: String::new(),
        lesson_id: lesson_id.into(),
    };

    Catalog::new(
        vec![
            lesson("lesson-1", "第1課：はじめまして"),
            lesson("lesson-2", "第2課：ほんのきもちです"),
        ],
        vec![
            word("わたし", "我", "lesson-1"),
            word("せんせい", "老师", "lesson-1"),
            word("がくせい", "学生", "lesson-1"),
            word("ほん", "书", "lesson-2"),
            word("じしょ", "词典", "lesson-2"),
        ],
        vec![
            rule("N1 は N2 です", "lesson-1"),
            rule("これ／それ／あれ", "lesson-2"),
        ],
    )
}

pub fn entry(data: &mut SrsData, key: ItemKey, streak: u32, next_review: u64) {
    data.insert(key.storage_key(), SrsStatus::new(&key, streak, next_review));
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

pub struct MockServer {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }
}

/// Serves `status` + `body` for every path and records what it received.
pub async fn spawn_mock(status: StatusCode, body: serde_json::Value) -> MockServer {
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let counter = Arc::clone(&hits);
    let recorder = Arc::clone(&requests);
    let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap, raw: String| {
        let counter = Arc::clone(&counter);
        let recorder = Arc::clone(&recorder);
        let body = body.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            recorder.lock().push(RecordedRequest {
                path: uri.path().to_string(),
                headers,
                body: serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null),
            });
            (status, axum::Json(body))
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        base_url: format!("http://{addr}"),
        hits,
        requests,
    }
}

/// Address nothing is listening on.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
