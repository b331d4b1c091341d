//! Frame-by-frame score derivation.
//!
//! Scoring is a pure function over a snapshot of the delivery log. Pinfall
//! is always derived from the pins-left chain (the deck before a ball minus
//! the pins it left), never from a separately stored count, and strike
//! bonuses walk the literal delivery sequence so chained strikes resolve
//! from the balls that were actually rolled.

use crate::validate::{pins_before, trusted_prefix, Fault};
use pindeck_core::delivery::{Delivery, Mark};
use serde::Serialize;

/// The scoring shell's display model: one cumulative cell per frame (None
/// until the frame resolves), the running total, and the highest final
/// score the remaining balls could still reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameScore {
    pub frames: [Option<u16>; 10],
    pub total: u16,
    pub max_possible: u16,
    pub fault: Option<Fault>,
}

/// Scores a game from its delivery log. Malformed records mark their frame
/// and every later frame undetermined; earlier frames score normally.
pub fn score_game(deliveries: &[Delivery]) -> GameScore {
    let (deliveries, fault) = trusted_prefix(deliveries);
    let pinfalls = ball_pinfalls(deliveries);

    let mut frames = [None; 10];
    let mut total: u16 = 0;
    let mut cursor = 0;
    for frame in 1..=10u8 {
        let start = cursor;
        while cursor < deliveries.len() && deliveries[cursor].frame == frame {
            cursor += 1;
        }
        if cursor == start {
            break;
        }
        let score = if frame < 10 {
            early_frame_score(&deliveries[start..cursor], &pinfalls, start)
        } else {
            tenth_frame_score(&deliveries[start..cursor], &pinfalls[start..cursor])
        };
        match score {
            Some(points) => {
                total += points;
                frames[frame as usize - 1] = Some(total);
            }
            None => break,
        }
    }

    let max_possible = max_possible(deliveries, &frames, total);
    GameScore {
        frames,
        total,
        max_possible,
        fault,
    }
}

/// Pins downed by each ball, derived from the pins-left chain.
fn ball_pinfalls(deliveries: &[Delivery]) -> Vec<u16> {
    (0..deliveries.len())
        .map(|i| (pins_before(deliveries, i).len() - deliveries[i].pins_left.len()) as u16)
        .collect()
}

/// Frames 1-9. `start` is the frame's position in the full ball sequence;
/// strike and spare bonuses read the deliveries that follow it, whichever
/// frame they belong to.
fn early_frame_score(frame: &[Delivery], pinfalls: &[u16], start: usize) -> Option<u16> {
    if frame[0].mark == Mark::Strike {
        let bonus1 = pinfalls.get(start + 1)?;
        let bonus2 = pinfalls.get(start + 2)?;
        return Some(10 + bonus1 + bonus2);
    }
    if frame.len() < 2 {
        return None;
    }
    match frame[1].mark {
        Mark::Spare => pinfalls.get(start + 2).map(|bonus| 10 + bonus),
        _ => Some(pinfalls[start] + pinfalls[start + 1]),
    }
}

/// Frame 10 is its own state machine: no borrowing from a future frame,
/// just the sum of its own balls once the frame has earned all of them.
fn tenth_frame_score(frame: &[Delivery], pinfalls: &[u16]) -> Option<u16> {
    let complete = match frame[0].mark {
        Mark::Strike => frame.len() == 3,
        _ => match frame.get(1).map(|d| d.mark) {
            Some(Mark::Spare) => frame.len() == 3,
            Some(_) => frame.len() == 2,
            None => false,
        },
    };
    if !complete {
        return None;
    }
    Some(pinfalls.iter().sum())
}

/// Running total plus a best-case ceiling for the first unresolved frame
/// (30 untouched or off a strike, else 20: finish the spare, then strike)
/// and a flat 30 for every frame after it.
fn max_possible(deliveries: &[Delivery], frames: &[Option<u16>; 10], total: u16) -> u16 {
    let Some(first_open) = frames.iter().position(|f| f.is_none()) else {
        return total;
    };
    let frame = (first_open + 1) as u8;
    let first_ball = deliveries.iter().find(|d| d.frame == frame);
    let ceiling = match first_ball {
        None => 30,
        Some(d) if d.mark == Mark::Strike => 30,
        Some(_) => 20,
    };
    total + ceiling + 30 * (10 - frame as u16)
}
