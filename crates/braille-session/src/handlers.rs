use tracing::debug;

use braille_core::{decode_with, encode_with};

use super::types::{InputSource, SessionResponse};
use super::TranslationSession;

impl TranslationSession {
    /// Replace the text with typed input.
    pub fn set_typed(&mut self, text: &str) -> SessionResponse {
        debug!(len = text.len(), "typed");
        self.set_text(text.to_string(), InputSource::Typed)
    }

    /// Replace the text with the recognizer's cumulative transcript.
    pub fn set_transcript(&mut self, transcript: &str) -> SessionResponse {
        debug!(transcript, "transcript");
        self.set_text(transcript.to_string(), InputSource::Speech)
    }

    /// Append a quick-insert word, space-separated from existing text.
    pub fn insert_phrase(&mut self, word: &str) -> SessionResponse {
        debug!(word, "phrase");
        let text = if self.text.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", self.text, word)
        };
        self.set_text(text, InputSource::Phrase)
    }

    /// Accept a gesture label.
    ///
    /// Empty labels and a repeat of the previous gesture are ignored.
    /// Unmapped characters in the label render as the gesture placeholder.
    pub fn push_gesture(&mut self, label: &str) -> Option<SessionResponse> {
        if label.is_empty() || self.last_gesture.as_deref() == Some(label) {
            debug!(label, "gesture ignored");
            return None;
        }
        debug!(label, "gesture");
        self.last_gesture = Some(label.to_string());
        self.history.record(label);
        self.text = label.to_string();
        self.braille = encode_with(&self.table, label, self.settings.gesture_policy());
        Some(self.response(InputSource::Gesture))
    }

    /// Append hand-entered cells and re-decode the whole buffer.
    pub fn push_cells(&mut self, cells: &str) -> SessionResponse {
        debug!(cells, "cells");
        self.braille.push_str(cells);
        self.text = decode_with(&self.table, &self.braille);
        self.response(InputSource::Cells)
    }

    /// Remove the last cell from the Braille buffer and re-decode.
    pub fn backspace_cell(&mut self) -> SessionResponse {
        self.braille.pop();
        self.text = decode_with(&self.table, &self.braille);
        self.response(InputSource::Cells)
    }

    fn set_text(&mut self, text: String, source: InputSource) -> SessionResponse {
        self.braille = encode_with(&self.table, &text, self.settings.text_policy());
        self.text = text;
        self.response(source)
    }

    fn response(&self, source: InputSource) -> SessionResponse {
        SessionResponse {
            text: self.text.clone(),
            braille: self.braille.clone(),
            source,
        }
    }
}
