pub mod difficulty;
pub mod language;

pub use difficulty::Difficulty;
pub use language::Language;
