//! Command implementations

pub mod play;
pub mod word;

pub use play::run_play;
pub use word::run_word;
