//! Game state value types: the game aggregate, tricks, and hand results.

pub mod instance;
pub mod result;
pub mod trick;

pub use instance::{GameInstance, WINNING_SCORE};
pub use result::{HandOutcome, HandResult};
pub use trick::{Trick, TrickPlay};
