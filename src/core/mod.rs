//! Core domain types
//!
//! Leaf value types of the game: marks, words, feedback, hints, and the
//! dictionary collaborator seam. Everything here is pure, storage-free, and
//! operates on in-memory values only.

mod dictionary;
mod feedback;
mod hint;
mod mark;
mod word;

pub use dictionary::{Dictionary, LengthNotSupported};
pub use feedback::Feedback;
pub use hint::{Hint, PLACEHOLDER};
pub use mark::Mark;
pub use word::{Word, WordError};
