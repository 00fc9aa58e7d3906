use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::{
        CardDirection,
        TangoError,
        TargetLanguage,
    },
    persistence::{
        get_app_data_dir,
        get_data_file_path,
        load_json_or_default,
        save_json,
    },
};

const SETTINGS_FILE: &str = "settings.json";
const DEFAULT_SOURCE: &str = "vocabulary.json";

/// User configuration. Only preferences live here; study progress is never
/// written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: String,
    pub language: TargetLanguage,
    pub direction: CardDirection,
    pub export_dir: Option<PathBuf>,
    pub strings_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            language: TargetLanguage::default(),
            direction: CardDirection::default(),
            export_dir: None,
            strings_file: None,
        }
    }
}

impl Settings {
    pub fn path() -> PathBuf {
        get_data_file_path(SETTINGS_FILE)
    }

    pub fn load() -> Self {
        load_json_or_default(&Self::path())
    }

    pub fn save(&self) -> Result<(), TangoError> {
        save_json(self, &Self::path())
    }

    /// Directory exports go to when none is configured.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(get_app_data_dir)
    }
}
