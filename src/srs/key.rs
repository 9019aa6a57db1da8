use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::storage::keys::{grammar_key, vocab_key, GRAMMAR_PREFIX, VOCAB_PREFIX};

/// Identity of a reviewable item: the item kind plus its natural key.
///
/// Persisted as `vocab-<word>` / `grammar-<title>` so existing stores keep
/// working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKey {
    Vocabulary(String),
    Grammar(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unrecognised item key: {0}")]
    UnknownKind(String),
    #[error("item key has an empty natural key: {0}")]
    Empty(String),
}

impl ItemKey {
    pub fn vocabulary(word: impl Into<String>) -> Self {
        Self::Vocabulary(word.into())
    }

    pub fn grammar(title: impl Into<String>) -> Self {
        Self::Grammar(title.into())
    }

    pub fn natural_key(&self) -> &str {
        match self {
            Self::Vocabulary(word) => word,
            Self::Grammar(title) => title,
        }
    }

    pub fn storage_key(&self) -> String {
        match self {
            Self::Vocabulary(word) => vocab_key(word),
            Self::Grammar(title) => grammar_key(title),
        }
    }
}

impl FromStr for ItemKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = if let Some(word) = s.strip_prefix(VOCAB_PREFIX) {
            Self::Vocabulary(word.to_string())
        } else if let Some(title) = s.strip_prefix(GRAMMAR_PREFIX) {
            Self::Grammar(title.to_string())
        } else {
            return Err(KeyError::UnknownKind(s.to_string()));
        };

        if key.natural_key().is_empty() {
            return Err(KeyError::Empty(s.to_string()));
        }
        Ok(key)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}

impl Serialize for ItemKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.storage_key())
    }
}

impl<'de> Deserialize<'de> for ItemKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
