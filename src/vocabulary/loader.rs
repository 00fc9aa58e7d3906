use std::{
    collections::HashSet,
    time::Instant,
};

use serde::Deserialize;
use wana_kana::{
    ConvertJapanese,
    IsJapaneseStr,
};

use super::WordSource;
use crate::core::{
    http::{
        fetch_text,
        http_client,
    },
    TangoError,
    Word,
};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawWord {
    id: RawId,
    category: String,
    #[serde(default)]
    romaji: String,
    hiragana: String,
    english: String,
    #[serde(default)]
    spanish: Option<String>,
}

pub async fn load_words(source: &WordSource) -> Result<Vec<Word>, TangoError> {
    let start = Instant::now();

    let body = match source {
        WordSource::File(path) => tokio::fs::read_to_string(path).await?,
        WordSource::Url(url) => {
            let client = http_client()?;
            fetch_text(&client, url).await?
        }
    };

    let words = parse_words(&body)?;
    log::info!(
        "Loaded {} words from {} ({:.1}s)",
        words.len(),
        source,
        start.elapsed().as_secs_f32()
    );
    Ok(words)
}

/// Parses and normalises a JSON word list. Ids must be unique.
pub fn parse_words(json: &str) -> Result<Vec<Word>, TangoError> {
    let raw: Vec<RawWord> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(raw.len());
    let mut words = Vec::with_capacity(raw.len());

    for entry in raw {
        let id = entry.id.into_string();
        if !seen.insert(id.clone()) {
            return Err(TangoError::DuplicateWordId(id));
        }

        let hiragana = entry.hiragana.trim().to_string();
        if !hiragana.is_empty() && !hiragana.as_str().is_kana() {
            log::warn!("Word {} has a reading that is not kana: {}", id, hiragana);
        }

        let romaji = match entry.romaji.trim() {
            "" => hiragana.as_str().to_romaji(),
            given => given.to_string(),
        };

        words.push(Word {
            id,
            category: entry.category.trim().to_string(),
            romaji,
            hiragana,
            english: entry.english,
            spanish: entry.spanish,
        });
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"[
        {"id": "1", "category": "colors", "romaji": "aka", "hiragana": "あか", "english": "red", "spanish": "rojo"},
        {"id": 2, "category": "animals", "romaji": "", "hiragana": "ねこ", "english": "cat", "spanish": null},
        {"id": "3", "category": "colors", "hiragana": "あお", "english": "blue"}
    ]"#;

    #[test]
    fn test_parse_words_normalises_entries() {
        let words = parse_words(SAMPLE).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].id, "2");
        assert_eq!(words[1].romaji, "neko");
        assert_eq!(words[2].romaji, "ao");
        assert_eq!(words[0].spanish.as_deref(), Some("rojo"));
        assert!(words[1].spanish.is_none());
    }

    #[test]
    fn test_parse_words_rejects_duplicates_and_bad_json() {
        let dup = r#"[
            {"id": "1", "category": "a", "romaji": "a", "hiragana": "あ", "english": "a"},
            {"id": 1, "category": "b", "romaji": "i", "hiragana": "い", "english": "i"}
        ]"#;
        assert!(matches!(parse_words(dup), Err(TangoError::DuplicateWordId(id)) if id == "1"));
        assert!(parse_words("[]").unwrap().is_empty());
        assert!(matches!(parse_words("{"), Err(TangoError::Json(_))));
    }

    #[tokio::test]
    async fn test_load_words_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = WordSource::File(file.path().to_path_buf());
        let words = load_words(&source).await.unwrap();
        assert_eq!(words.len(), 3);
    }

    #[tokio::test]
    async fn test_load_words_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordSource::File(dir.path().join("missing.json"));
        assert!(matches!(load_words(&source).await, Err(TangoError::Io(_))));
    }
}
