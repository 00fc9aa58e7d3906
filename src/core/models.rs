use std::{
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::TangoError;

pub type Category = String;

/// A single vocabulary entry. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub category: Category,
    pub romaji: String,
    pub hiragana: String,
    pub english: String,
    #[serde(default)]
    pub spanish: Option<String>,
}

impl Word {
    /// Translation in `language`, falling back to English when missing.
    pub fn translation(&self, language: TargetLanguage) -> &str {
        match language {
            TargetLanguage::English => &self.english,
            TargetLanguage::Spanish => self
                .spanish
                .as_deref()
                .filter(|text| !text.is_empty())
                .unwrap_or(&self.english),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
    Skipped,
}

impl Outcome {
    pub fn is_unanswered(&self) -> bool {
        matches!(self, Outcome::Unanswered)
    }

    /// String-table key for the status marker.
    pub fn status_key(&self) -> &'static str {
        match self {
            Outcome::Unanswered => "to-guess",
            Outcome::Correct => "status-correct",
            Outcome::Incorrect => "status-incorrect",
            Outcome::Skipped => "status-skipped",
        }
    }
}

/// Which side of the card shows the Japanese text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardDirection {
    #[default]
    SourceFirst,
    TargetFirst,
}

impl CardDirection {
    pub fn toggled(self) -> Self {
        match self {
            CardDirection::SourceFirst => CardDirection::TargetFirst,
            CardDirection::TargetFirst => CardDirection::SourceFirst,
        }
    }
}

impl FromStr for CardDirection {
    type Err = TangoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source-first" | "jp-to-target" => Ok(CardDirection::SourceFirst),
            "target-first" | "target-to-jp" => Ok(CardDirection::TargetFirst),
            other => Err(TangoError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for CardDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardDirection::SourceFirst => write!(f, "source-first"),
            CardDirection::TargetFirst => write!(f, "target-first"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl TargetLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::English => "en",
            TargetLanguage::Spanish => "es",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TargetLanguage::English => TargetLanguage::Spanish,
            TargetLanguage::Spanish => TargetLanguage::English,
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = TangoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(TargetLanguage::English),
            "es" | "spanish" => Ok(TargetLanguage::Spanish),
            other => Err(TangoError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
