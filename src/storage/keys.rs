pub const SRS_DATA_KEY: &str = "nihongo_srs_data";
pub const AI_CONFIG_KEY: &str = "nihongo_ai_config";
/// Read-only: older builds stored a bare Gemini key here.
pub const LEGACY_GEMINI_KEY: &str = "nihongo_gemini_key";

pub const VOCAB_PREFIX: &str = "vocab-";
pub const GRAMMAR_PREFIX: &str = "grammar-";

pub fn vocab_key(word: &str) -> String {
    format!("{VOCAB_PREFIX}{word}")
}

pub fn grammar_key(title: &str) -> String {
    format!("{GRAMMAR_PREFIX}{title}")
}
