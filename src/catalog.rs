//! Read-only lesson / vocabulary / grammar catalog.
//!
//! Content is authored elsewhere and handed to this crate as-is. Lookups are
//! by natural key: the word for vocabulary, the title for grammar.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::srs::ItemKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub word: String,
    #[serde(default)]
    pub reading: String,
    pub meaning: String,
    pub lesson_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarRule {
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    pub lesson_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "CatalogContent", into = "CatalogContent")]
pub struct Catalog {
    lessons: Vec<Lesson>,
    vocabulary: Vec<VocabularyEntry>,
    grammar: Vec<GrammarRule>,
    words: HashSet<String>,
    titles: HashSet<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogContent {
    #[serde(default)]
    lessons: Vec<Lesson>,
    #[serde(default)]
    vocabulary: Vec<VocabularyEntry>,
    #[serde(default)]
    grammar: Vec<GrammarRule>,
}

impl From<CatalogContent> for Catalog {
    fn from(content: CatalogContent) -> Self {
        Catalog::new(content.lessons, content.vocabulary, content.grammar)
    }
}

impl From<Catalog> for CatalogContent {
    fn from(catalog: Catalog) -> Self {
        CatalogContent {
            lessons: catalog.lessons,
            vocabulary: catalog.vocabulary,
            grammar: catalog.grammar,
        }
    }
}

impl Catalog {
    pub fn new(
        lessons: Vec<Lesson>,
        vocabulary: Vec<VocabularyEntry>,
        grammar: Vec<GrammarRule>,
    ) -> Self {
        let words = vocabulary.iter().map(|v| v.word.clone()).collect();
        let titles = grammar.iter().map(|g| g.title.clone()).collect();
        Self {
            lessons,
            vocabulary,
            grammar,
            words,
            titles,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn vocabulary(&self) -> &[VocabularyEntry] {
        &self.vocabulary
    }

    pub fn grammar(&self) -> &[GrammarRule] {
        &self.grammar
    }

    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    pub fn has_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn has_grammar(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    /// Whether the item a key points at is still part of the catalog.
    pub fn contains(&self, key: &ItemKey) -> bool {
        match key {
            ItemKey::Vocabulary(word) => self.has_word(word),
            ItemKey::Grammar(title) => self.has_grammar(title),
        }
    }

    /// Keys of every vocabulary entry and grammar rule that belongs to `lesson_id`.
    pub fn lesson_items(&self, lesson_id: &str) -> Vec<ItemKey> {
        let vocab = self
            .vocabulary
            .iter()
            .filter(|v| v.lesson_id == lesson_id)
            .map(|v| ItemKey::Vocabulary(v.word.clone()));
        let grammar = self
            .grammar
            .iter()
            .filter(|g| g.lesson_id == lesson_id)
            .map(|g| ItemKey::Grammar(g.title.clone()));
        vocab.chain(grammar).collect()
    }

    pub fn all_items(&self) -> Vec<ItemKey> {
        let vocab = self
            .vocabulary
            .iter()
            .map(|v| ItemKey::Vocabulary(v.word.clone()));
        let grammar = self
            .grammar
            .iter()
            .map(|g| ItemKey::Grammar(g.title.clone()));
        vocab.chain(grammar).collect()
    }

    /// Copy of the catalog with one vocabulary entry removed, as happens when
    /// content is revised between releases.
    pub fn without_word(&self, word: &str) -> Self {
        let vocabulary = self
            .vocabulary
            .iter()
            .filter(|v| v.word != word)
            .cloned()
            .collect();
        Catalog::new(self.lessons.clone(), vocabulary, self.grammar.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            vec![Lesson {
                id: "lesson-1".into(),
                title: "第1課：はじめまして".into(),
                description: String::new(),
                topics: vec![],
            }],
            vec![VocabularyEntry {
                word: "わたし".into(),
                reading: "わたし".into(),
                meaning: "我".into(),
                lesson_id: "lesson-1".into(),
            }],
            vec![GrammarRule {
                title: "N1 は N2 です".into(),
                explanation: String::new(),
                lesson_id: "lesson-1".into(),
            }],
        )
    }

    #[test]
    fn test_contains_by_natural_key() {
        let catalog = sample();
        assert!(catalog.contains(&ItemKey::Vocabulary("わたし".into())));
        assert!(catalog.contains(&ItemKey::Grammar("N1 は N2 です".into())));
        assert!(!catalog.contains(&ItemKey::Vocabulary("あなた".into())));
    }

    #[test]
    fn test_lesson_items_collects_both_kinds() {
        let catalog = sample();
        assert_eq!(catalog.lesson_items("lesson-1").len(), 2);
        assert!(catalog.lesson_items("lesson-9").is_empty());
    }

    #[test]
    fn test_from_json_rebuilds_indexes() {
        let json = r#"{
            "lessons": [{"id": "lesson-1", "title": "L1"}],
            "vocabulary": [{"word": "ほん", "meaning": "书", "lessonId": "lesson-1"}],
            "grammar": []
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.has_word("ほん"));
        assert!(catalog.lesson("lesson-1").is_some());
    }

    #[test]
    fn test_without_word() {
        let catalog = sample().without_word("わたし");
        assert!(!catalog.has_word("わたし"));
        assert!(catalog.has_grammar("N1 は N2 です"));
    }
}
