//! Load lifecycle and command dispatch around a [`Session`].
//!
//! The engine starts out `Pending`. Commands are rejected until a word list
//! has been loaded; a failed load leaves the engine `Unavailable` until the
//! caller starts a fresh load.

use crate::{
    core::{
        CardDirection,
        TangoError,
        TargetLanguage,
        Word,
    },
    session::Session,
    vocabulary::{
        load_words,
        WordSource,
    },
};

#[derive(Debug, Clone)]
pub enum LoadState {
    Pending,
    Ready(Session),
    Unavailable(String),
}

/// User intents forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    Flip,
    Mark { correct: bool },
    SelectCategories(Vec<String>),
    ToggleCategory { category: String, selected: bool },
    SelectAll,
    SelectNone,
    Shuffle,
    Reset,
    ToggleDirection,
    ToggleLanguage,
}

#[derive(Debug)]
pub struct Engine {
    state: LoadState,
    direction: CardDirection,
    language: TargetLanguage,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            state: LoadState::Pending,
            direction: CardDirection::default(),
            language: TargetLanguage::default(),
        }
    }

    /// Display flags applied to the session once it is built.
    pub fn with_display(mut self, direction: CardDirection, language: TargetLanguage) -> Self {
        self.direction = direction;
        self.language = language;
        self
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            LoadState::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Unavailable(reason) => Some(reason),
            _ => None,
        }
    }

    /// Drops any current session and waits for a new word list.
    pub fn begin_load(&mut self) {
        self.state = LoadState::Pending;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Word>, TangoError>) {
        self.state = match result.and_then(Session::new) {
            Ok(session) => {
                log::info!(
                    "Session ready: {} words in {} categories",
                    session.words().len(),
                    session.categories().len()
                );
                LoadState::Ready(session.with_display(self.direction, self.language))
            }
            Err(e) => {
                log::error!("Failed to load vocabulary: {}", e);
                LoadState::Unavailable(e.to_string())
            }
        };
    }

    pub async fn load(&mut self, source: &WordSource) {
        self.begin_load();
        let result = load_words(source).await;
        self.finish_load(result);
    }

    /// Applies a command to the live session. Returns `false` when the engine
    /// is not ready or the command had nothing to act on.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let LoadState::Ready(session) = &mut self.state else {
            log::debug!("Ignoring {:?}: engine not ready", command);
            return false;
        };

        match command {
            Command::Previous => session.go_to_previous(),
            Command::Next => session.go_to_next(),
            Command::Flip => {
                session.flip();
                !session.is_empty()
            }
            Command::Mark { correct } => session.mark_current(correct),
            Command::SelectCategories(categories) => {
                session.set_selected_categories(categories);
                true
            }
            Command::ToggleCategory { category, selected } => {
                session.toggle_category(&category, selected);
                true
            }
            Command::SelectAll => {
                session.select_all();
                true
            }
            Command::SelectNone => {
                session.select_none();
                true
            }
            Command::Shuffle => {
                session.shuffle();
                true
            }
            Command::Reset => {
                session.reset();
                true
            }
            Command::ToggleDirection => {
                session.toggle_direction();
                self.direction = session.direction();
                true
            }
            Command::ToggleLanguage => {
                session.toggle_language();
                self.language = session.language();
                true
            }
        }
    }
}
