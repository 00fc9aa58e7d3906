//! Word list loading.
//!
//! A word list is a JSON array of records shaped like [`Word`]. It is read
//! once at startup from a local file or an `http(s)` URL.

pub mod loader;

use std::{
    fmt,
    path::PathBuf,
    str::FromStr,
};

pub use loader::{
    load_words,
    parse_words,
};

use crate::core::TangoError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    File(PathBuf),
    Url(String),
}

impl FromStr for WordSource {
    type Err = TangoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TangoError::Custom("Empty word list source".to_string()));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(WordSource::Url(trimmed.to_string()))
        } else {
            Ok(WordSource::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::File(path) => write!(f, "{}", path.display()),
            WordSource::Url(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parsing() {
        assert_eq!(
            "https://example.com/vocabulary.json".parse::<WordSource>().unwrap(),
            WordSource::Url("https://example.com/vocabulary.json".to_string())
        );
        assert_eq!(
            " ./vocabulary.json ".parse::<WordSource>().unwrap(),
            WordSource::File(PathBuf::from("./vocabulary.json"))
        );
        assert!("   ".parse::<WordSource>().is_err());
    }
}
