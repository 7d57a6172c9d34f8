//! Bidirectional text/Braille transliteration.
//!
//! A single immutable [`CharacterMap`](table::CharacterMap) drives both
//! [`encode`] and [`decode`]; everything else here is seed data or
//! configuration around it.

pub mod cell;
mod decode;
mod encode;
pub mod palette;
pub mod phrases;
pub mod settings;
pub mod table;

#[cfg(test)]
mod tests;

pub use decode::{decode, decode_with};
pub use encode::{encode, encode_with, MissPolicy};
pub use table::{CharacterMap, TableError};
