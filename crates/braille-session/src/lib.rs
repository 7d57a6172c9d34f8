//! Stateful translation session shared by every input modality.
//!
//! `TranslationSession` owns the current text and its Braille rendering.
//! Typed text, speech transcripts, gesture labels and hand-entered cells
//! all arrive as [`Token`]s; each accepted token yields a
//! [`SessionResponse`] that the caller renders.

mod handlers;
mod history;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use braille_core::settings::{self, Settings};
use braille_core::CharacterMap;

pub use history::GestureHistory;
pub use types::{InputSource, SessionResponse, Token};

pub struct TranslationSession {
    table: Arc<CharacterMap>,
    settings: Settings,

    text: String,
    braille: String,

    /// Last gesture label accepted; repeats of it are ignored.
    last_gesture: Option<String>,
    history: GestureHistory,
}

impl TranslationSession {
    pub fn new(table: Arc<CharacterMap>, settings: Settings) -> Self {
        let history = GestureHistory::new(settings.session.history_size);
        Self {
            table,
            settings,
            text: String::new(),
            braille: String::new(),
            last_gesture: None,
            history,
        }
    }

    /// Session over the global character table and settings.
    pub fn with_globals() -> Self {
        Self::new(
            CharacterMap::shared(),
            settings::settings().clone(),
        )
    }

    /// Dispatch one recognized token.
    ///
    /// Returns `None` when the token was ignored (empty or repeated gesture).
    pub fn handle(&mut self, token: Token) -> Option<SessionResponse> {
        match token {
            Token::Typed(text) => Some(self.set_typed(&text)),
            Token::Transcript(text) => Some(self.set_transcript(&text)),
            Token::Phrase(word) => Some(self.insert_phrase(&word)),
            Token::Gesture(label) => self.push_gesture(&label),
            Token::Cells(cells) => Some(self.push_cells(&cells)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn braille(&self) -> &str {
        &self.braille
    }

    /// Recent distinct gestures, newest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter()
    }

    pub fn last_gesture(&self) -> Option<&str> {
        self.last_gesture.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.braille.is_empty()
    }

    /// Drop the current text and Braille. Gesture history is kept.
    pub fn clear(&mut self) {
        self.text.clear();
        self.braille.clear();
        self.last_gesture = None;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
