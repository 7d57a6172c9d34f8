mod engine;

pub use engine::{BrailleEngine, EngineError};
