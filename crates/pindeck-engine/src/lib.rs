//! Pindeck scoring engine.
//!
//! Pure derivation of frame scores, running totals, maximum-possible
//! projections, and score-sheet display models from an ordered delivery
//! log, plus a random-game simulator. The string-facing helpers at the
//! bottom exist for the wasm and CLI shells.

pub mod generator;
pub mod scorer;
pub mod sheet;
pub mod validate;

pub use generator::random_game;
pub use scorer::{score_game, GameScore};
pub use sheet::{score_sheet, FrameBox, ScoreSheet};
pub use validate::{validate, Fault, FaultKind};

pub use pindeck_core::splits;
pub use pindeck_core::{Delivery, Game, Mark, Pin, PinSet};

/// Scores a delivery log serialized as a JSON array, the shape the
/// persistence shell hands over after its row-to-record mapping.
pub fn score_log_json(json: &str) -> Result<GameScore, String> {
    let deliveries: Vec<Delivery> = serde_json::from_str(json).map_err(|e| e.to_string())?;
    Ok(score_game(&deliveries))
}

/// Like [`score_log_json`], but returns the full score-sheet display model.
pub fn sheet_log_json(json: &str) -> Result<ScoreSheet, String> {
    let deliveries: Vec<Delivery> = serde_json::from_str(json).map_err(|e| e.to_string())?;
    Ok(score_sheet(&deliveries))
}

/// Scores shorthand frame notation like "X 9/ 72". None if the notation
/// does not describe a legal partial game.
pub fn score_notation(frames: &str) -> Option<GameScore> {
    let game = pindeck_core::io::notation::parse_game(frames)?;
    Some(score_game(&game.deliveries))
}

/// Simulates a random complete game and returns its delivery log as JSON.
pub fn generate_random_game_json() -> String {
    let game = random_game(&mut rand::thread_rng());
    serde_json::to_string(&game.deliveries).expect("delivery logs always serialize")
}
