//! Score-sheet display model.
//!
//! The serializable shape a rendering shell draws from: per-frame roll
//! symbols and cumulative cells, plus the totals. Undetermined and
//! malformed frames both come out as blank cells; the fault rides along for
//! callers that want to explain the blanks.

use crate::scorer::{score_game, GameScore};
use crate::validate::{pins_before, trusted_prefix, Fault};
use pindeck_core::delivery::{Delivery, Mark};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct FrameBox {
    pub rolls: Vec<String>,
    pub cumulative: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSheet {
    pub frames: Vec<FrameBox>,
    pub total: u16,
    pub max_possible: u16,
    pub fault: Option<Fault>,
}

pub fn score_sheet(deliveries: &[Delivery]) -> ScoreSheet {
    let score: GameScore = score_game(deliveries);
    let (trusted, _) = trusted_prefix(deliveries);

    let mut frames = vec![FrameBox::default(); 10];
    for (i, d) in trusted.iter().enumerate() {
        let pinfall = (pins_before(trusted, i).len() - d.pins_left.len()) as u16;
        frames[d.frame as usize - 1]
            .rolls
            .push(roll_symbol(d, pinfall));
    }
    for (frame, cell) in frames.iter_mut().zip(score.frames) {
        frame.cumulative = cell;
    }

    ScoreSheet {
        frames,
        total: score.total,
        max_possible: score.max_possible,
        fault: score.fault,
    }
}

/// Sheet symbol for one ball: X, /, the pinfall count, "-" for a miss, and
/// an S-prefixed count for a first-ball split leave (e.g. "S8" for the
/// 7-10).
pub fn roll_symbol(delivery: &Delivery, pinfall: u16) -> String {
    match delivery.mark {
        Mark::Strike => "X".to_string(),
        Mark::Spare => "/".to_string(),
        Mark::Leave if delivery.split => format!("S{}", pinfall),
        Mark::Leave | Mark::Open => {
            if pinfall == 0 {
                "-".to_string()
            } else {
                pinfall.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pindeck_core::game::Game;
    use pindeck_core::pinset::PinSet;

    #[test]
    fn test_empty_sheet() {
        let sheet = score_sheet(&[]);
        assert_eq!(sheet.frames.len(), 10);
        assert!(sheet.frames.iter().all(|f| f.rolls.is_empty()));
        assert_eq!(sheet.total, 0);
        assert_eq!(sheet.max_possible, 300);
    }

    #[test]
    fn test_symbols_for_common_frames() {
        let sheet = score_sheet(&Game::parse("X 9/ 72 --").deliveries);
        assert_eq!(sheet.frames[0].rolls, vec!["X"]);
        assert_eq!(sheet.frames[1].rolls, vec!["9", "/"]);
        assert_eq!(sheet.frames[2].rolls, vec!["7", "2"]);
        assert_eq!(sheet.frames[3].rolls, vec!["-", "-"]);
    }

    #[test]
    fn test_split_symbol() {
        // An 8-count leaving the 7-10 shows as a flagged split.
        let d = Delivery::new(1, 1, 1, Mark::Leave, PinSet::from_numbers(&[7, 10]).unwrap());
        let sheet = score_sheet(&[d]);
        assert_eq!(sheet.frames[0].rolls, vec!["S8"]);
    }

    #[test]
    fn test_cumulative_cells_match_score() {
        let sheet = score_sheet(&Game::parse("X 9/ 72").deliveries);
        assert_eq!(sheet.frames[0].cumulative, Some(20));
        assert_eq!(sheet.frames[1].cumulative, Some(37));
        assert_eq!(sheet.frames[2].cumulative, Some(46));
        assert_eq!(sheet.total, 46);
    }

    #[test]
    fn test_malformed_rolls_not_rendered() {
        let mut deliveries = Game::parse("X").deliveries;
        deliveries.push(Delivery::new(2, 5, 1, Mark::Strike, PinSet::EMPTY));
        let sheet = score_sheet(&deliveries);
        assert_eq!(sheet.frames[0].rolls, vec!["X"]);
        assert!(sheet.frames[4].rolls.is_empty());
        assert!(sheet.fault.is_some());
    }

    #[test]
    fn test_tenth_frame_three_symbols() {
        let sheet = score_sheet(&Game::parse("X X X X X X X X X X9/").deliveries);
        assert_eq!(sheet.frames[9].rolls, vec!["X", "9", "/"]);
    }
}
