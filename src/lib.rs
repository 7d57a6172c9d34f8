//! Braille transliteration engine.
//!
//! Re-exports the core conversions and session, and provides
//! [`BrailleEngine`], a cloneable handle that bundles a character table with
//! settings for callers that need more than the global defaults.

pub mod api;
mod trace_init;

pub use api::{BrailleEngine, EngineError};
pub use braille_core::{cell, palette, phrases, settings, table};
pub use braille_core::{decode, decode_with, encode, encode_with, CharacterMap, MissPolicy};
pub use braille_session::{GestureHistory, InputSource, SessionResponse, Token, TranslationSession};
pub use trace_init::init_tracing;
