//! Game state facade over the rulebook-core legality pipeline.

mod engine;
mod error;

pub use engine::Engine;
pub use error::EngineError;
