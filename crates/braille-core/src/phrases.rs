//! Common words and phrases with precomputed Braille, for quick insertion.
//!
//! This is seed data rather than something derived from the character
//! table at runtime. Every entry is expected to agree with [`encode`].

use crate::encode;

/// Phrase → Braille, in display order. Keys are lowercase.
pub static COMMON_PHRASES: &[(&str, &str)] = &[
    ("hello", "⠓⠑⠇⠇⠕"),
    ("goodbye", "⠛⠕⠕⠙⠃⠽⠑"),
    ("thank you", "⠞⠓⠁⠝⠅⠀⠽⠕⠥"),
    ("please", "⠏⠇⠑⠁⠎⠑"),
    ("help", "⠓⠑⠇⠏"),
    ("yes", "⠽⠑⠎"),
    ("no", "⠝⠕"),
    ("sorry", "⠎⠕⠗⠗⠽"),
    ("excuse me", "⠑⠭⠉⠥⠎⠑⠀⠍⠑"),
    ("how are you", "⠓⠕⠺⠀⠁⠗⠑⠀⠽⠕⠥"),
    ("i am fine", "⠊⠀⠁⠍⠀⠋⠊⠝⠑"),
    ("good morning", "⠛⠕⠕⠙⠀⠍⠕⠗⠝⠊⠝⠛"),
    ("good afternoon", "⠛⠕⠕⠙⠀⠁⠋⠞⠑⠗⠝⠕⠕⠝"),
    ("good evening", "⠛⠕⠕⠙⠀⠑⠧⠑⠝⠊⠝⠛"),
    ("good night", "⠛⠕⠕⠙⠀⠝⠊⠛⠓⠞"),
    ("my name is", "⠍⠽⠀⠝⠁⠍⠑⠀⠊⠎"),
    ("nice to meet you", "⠝⠊⠉⠑⠀⠞⠕⠀⠍⠑⠑⠞⠀⠽⠕⠥"),
    ("water", "⠺⠁⠞⠑⠗"),
    ("food", "⠋⠕⠕⠙"),
    ("bathroom", "⠃⠁⠞⠓⠗⠕⠕⠍"),
    ("emergency", "⠑⠍⠑⠗⠛⠑⠝⠉⠽"),
    ("doctor", "⠙⠕⠉⠞⠕⠗"),
    ("hospital", "⠓⠕⠎⠏⠊⠞⠁⠇"),
    ("family", "⠋⠁⠍⠊⠇⠽"),
    ("friend", "⠋⠗⠊⠑⠝⠙"),
];

/// Look up a phrase, ignoring case and surrounding whitespace.
pub fn lookup(phrase: &str) -> Option<&'static str> {
    let key = phrase.trim().to_lowercase();
    COMMON_PHRASES
        .iter()
        .find_map(|&(p, braille)| (p == key).then_some(braille))
}

pub fn iter() -> impl Iterator<Item = (&'static str, &'static str)> {
    COMMON_PHRASES.iter().copied()
}

pub fn words() -> impl Iterator<Item = &'static str> {
    COMMON_PHRASES.iter().map(|&(p, _)| p)
}

/// Braille for `text`: the table entry when there is one, else [`encode`].
pub fn quick_insert(text: &str) -> String {
    match lookup(text) {
        Some(braille) => braille.to_string(),
        None => encode(text),
    }
}
