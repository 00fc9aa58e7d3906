//! Display string lookup.
//!
//! Tables are plain JSON objects keyed by language code, then by string key:
//! `{ "en": { "next": "Next" }, "es": { "next": "Siguiente" } }`. The engine
//! never consults these; only the presentation layer does.

use std::{
    collections::HashMap,
    path::Path,
};

use crate::core::{
    TangoError,
    TargetLanguage,
};

const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Default)]
pub struct Strings {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Strings {
    pub fn from_json(json: &str) -> Result<Self, TangoError> {
        let tables: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        Ok(Self { tables })
    }

    pub fn load(path: &Path) -> Result<Self, TangoError> {
        let json = std::fs::read_to_string(path)?;
        let strings = Self::from_json(&json)?;
        log::info!("Loaded {} string tables from {}", strings.tables.len(), path.display());
        Ok(strings)
    }

    /// Looks `key` up in `language`, then English, then gives back the key.
    pub fn lookup<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        self.find(language, key).or_else(|| self.find(FALLBACK_LANGUAGE, key)).unwrap_or(key)
    }

    pub fn t<'a>(&'a self, language: TargetLanguage, key: &'a str) -> &'a str {
        self.lookup(language.code(), key)
    }

    fn find(&self, language: &str, key: &str) -> Option<&str> {
        self.tables.get(language).and_then(|table| table.get(key)).map(|text| text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: &str = r#"{
        "en": { "next": "Next", "colors": "Colors" },
        "es": { "next": "Siguiente" }
    }"#;

    #[test]
    fn test_lookup_fallback_chain() {
        let strings = Strings::from_json(TABLES).unwrap();
        assert_eq!(strings.t(TargetLanguage::Spanish, "next"), "Siguiente");
        assert_eq!(strings.t(TargetLanguage::Spanish, "colors"), "Colors");
        assert_eq!(strings.t(TargetLanguage::English, "animals"), "animals");
        assert_eq!(strings.lookup("fr", "next"), "Next");
    }

    #[test]
    fn test_empty_tables_echo_keys() {
        let strings = Strings::default();
        assert_eq!(strings.t(TargetLanguage::English, "to-guess"), "to-guess");
        assert!(Strings::from_json("[]").is_err());
    }
}
