/// One unit of recognized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Full contents of a text field; replaces the current text.
    Typed(String),
    /// Cumulative speech transcript; replaces the current text.
    Transcript(String),
    /// Quick-insert word, appended after a space.
    Phrase(String),
    /// Label produced by the gesture classifier.
    Gesture(String),
    /// Braille cells entered by hand, appended to the Braille buffer.
    Cells(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Typed,
    Speech,
    Phrase,
    Gesture,
    Cells,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    pub text: String,
    pub braille: String,
    pub source: InputSource,
}
