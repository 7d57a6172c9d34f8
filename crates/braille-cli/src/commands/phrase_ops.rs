use serde::Serialize;

use braille_core::phrases;

use super::pad;

#[derive(Debug, Serialize, PartialEq)]
pub struct PhraseEntry {
    pub phrase: String,
    pub braille: String,
    /// False when the phrase is not in the table and was encoded instead.
    pub known: bool,
}

pub fn lookup_phrase(phrase: &str) -> PhraseEntry {
    let known = phrases::lookup(phrase).is_some();
    PhraseEntry {
        phrase: phrase.trim().to_lowercase(),
        braille: phrases::quick_insert(phrase),
        known,
    }
}

pub fn all_phrases() -> Vec<PhraseEntry> {
    phrases::iter()
        .map(|(phrase, braille)| PhraseEntry {
            phrase: phrase.to_string(),
            braille: braille.to_string(),
            known: true,
        })
        .collect()
}

pub fn phrase_cmd(phrase: Option<&str>, json: bool) {
    let entries = match phrase {
        Some(p) => vec![lookup_phrase(p)],
        None => all_phrases(),
    };
    if json {
        println!("{}", serde_json::to_string(&entries).unwrap_or_default());
        return;
    }
    let width = entries
        .iter()
        .map(|e| unicode_width::UnicodeWidthStr::width(e.phrase.as_str()))
        .max()
        .unwrap_or(0);
    for e in &entries {
        let marker = if e.known { "" } else { "  (encoded)" };
        println!("{}  {}{}", pad(&e.phrase, width), e.braille, marker);
    }
}
