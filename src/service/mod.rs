//! Orchestration and storage seams
//!
//! Everything the engine deliberately does not do: identity, storage, and
//! the operation surface a transport layer would call.

mod games;
mod repository;

pub use games::{GameService, ScoreboardEntry, ServiceError};
pub use repository::{GameRepository, InMemoryGameRepository};
