//! Core engine types: RNG, settings, errors.
//!
//! These are the building blocks shared by every other module; nothing in
//! here knows about cards or game flow.

pub mod error;
pub mod rng;
pub mod settings;

pub use error::{EngineError, EngineResult, IllegalAction, IntegrityKind};
pub use rng::{GameRng, GameRngState};
pub use settings::{Difficulty, GameSettings, GameSpeed};
