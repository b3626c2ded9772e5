//! Automated card-play heuristic.

pub mod heuristic;

pub use heuristic::determine_card_to_play;
