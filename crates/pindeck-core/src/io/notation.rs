//! Shorthand frame notation.
//!
//! Whitespace-separated frames, one token each: `X` for a strike, `9/` for
//! a spare, `72` for an open frame, `-` for a miss, and up to three rolls in
//! the tenth frame (`X9/`, `XXX`, `7/X`). A trailing token may describe an
//! in-progress frame ("X 9" is a strike then a first ball of nine).
//!
//! The notation records pinfall counts, not which pins fell, so the parser
//! uses a fixed convention: each ball topples the lowest-numbered standing
//! pins and leaves the highest. Scoring only reads set sizes, so the
//! convention never affects totals; it only picks which named leave a split
//! annotation would show.

use crate::delivery::{Delivery, Mark};
use crate::game::Game;
use crate::pinset::PinSet;

/// Parses a whole game. Returns None on malformed notation: unknown roll
/// characters, more pins than stand, a non-final partial frame, more than
/// ten frames, or an unearned tenth-frame fill ball.
pub fn parse_game(s: &str) -> Option<Game> {
    let tokens: Vec<String> = s
        .split_whitespace()
        .map(|t| t.to_ascii_uppercase())
        .collect();
    if tokens.len() > 10 {
        return None;
    }
    let mut deliveries = Vec::new();
    let mut sequence = 0;
    for (i, token) in tokens.iter().enumerate() {
        let frame = (i + 1) as u8;
        let is_last_token = i + 1 == tokens.len();
        if frame < 10 {
            parse_early_frame(token, frame, is_last_token, &mut sequence, &mut deliveries)?;
        } else {
            parse_tenth_frame(token, &mut sequence, &mut deliveries)?;
        }
    }
    Some(Game { deliveries })
}

fn parse_early_frame(
    token: &str,
    frame: u8,
    is_last_token: bool,
    sequence: &mut u32,
    out: &mut Vec<Delivery>,
) -> Option<()> {
    let rolls: Vec<char> = token.chars().collect();
    match rolls.as_slice() {
        ['X'] => {
            push(out, sequence, frame, 1, Mark::Strike, PinSet::EMPTY);
            Some(())
        }
        [c1] => {
            // A lone first ball only makes sense at the end of the log.
            if !is_last_token {
                return None;
            }
            let left = leave_highest(PinSet::FULL, 10 - pin_count(*c1)?);
            push(out, sequence, frame, 1, Mark::Leave, left);
            Some(())
        }
        [c1, c2] => {
            let left1 = leave_highest(PinSet::FULL, 10 - pin_count(*c1)?);
            push(out, sequence, frame, 1, Mark::Leave, left1);
            if *c2 == '/' {
                push(out, sequence, frame, 2, Mark::Spare, PinSet::EMPTY);
            } else {
                let downed = pin_count(*c2)?;
                if downed > left1.len() {
                    return None;
                }
                let left2 = leave_highest(left1, left1.len() - downed);
                push(out, sequence, frame, 2, Mark::Open, left2);
            }
            Some(())
        }
        _ => None,
    }
}

fn parse_tenth_frame(token: &str, sequence: &mut u32, out: &mut Vec<Delivery>) -> Option<()> {
    let rolls: Vec<char> = token.chars().collect();
    if rolls.is_empty() || rolls.len() > 3 {
        return None;
    }
    let mut standing = PinSet::FULL;
    let mut fresh_deck = true;
    let mut marks = Vec::new();
    for (i, &c) in rolls.iter().enumerate() {
        let ball = (i + 1) as u8;
        let (mark, left) = if fresh_deck {
            if c == 'X' {
                (Mark::Strike, PinSet::EMPTY)
            } else {
                (Mark::Leave, leave_highest(PinSet::FULL, 10 - pin_count(c)?))
            }
        } else if c == '/' {
            (Mark::Spare, PinSet::EMPTY)
        } else if c == 'X' {
            return None;
        } else {
            let downed = pin_count(c)?;
            if downed > standing.len() {
                return None;
            }
            (Mark::Open, leave_highest(standing, standing.len() - downed))
        };
        push(out, sequence, 10, ball, mark, left);
        marks.push(mark);
        fresh_deck = mark.clears_deck();
        standing = if fresh_deck { PinSet::FULL } else { left };
    }
    // A third roll exists only after a strike or a spare.
    if marks.len() == 3 && marks[0] != Mark::Strike && marks[1] != Mark::Spare {
        return None;
    }
    Some(())
}

fn push(out: &mut Vec<Delivery>, sequence: &mut u32, frame: u8, ball: u8, mark: Mark, left: PinSet) {
    *sequence += 1;
    out.push(Delivery::new(*sequence, frame, ball, mark, left));
}

fn pin_count(c: char) -> Option<u8> {
    match c {
        '-' => Some(0),
        '0'..='9' => Some(c as u8 - b'0'),
        _ => None,
    }
}

/// The highest-numbered `count` pins of `standing`.
fn leave_highest(standing: PinSet, count: u8) -> PinSet {
    standing.pins().into_iter().rev().take(count as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(numbers: &[u8]) -> PinSet {
        PinSet::from_numbers(numbers).unwrap()
    }

    #[test]
    fn test_empty_notation() {
        let game = parse_game("").unwrap();
        assert!(game.is_empty());
    }

    #[test]
    fn test_strike_frame() {
        let game = parse_game("X").unwrap();
        assert_eq!(game.deliveries.len(), 1);
        let d = &game.deliveries[0];
        assert_eq!((d.frame, d.ball, d.mark), (1, 1, Mark::Strike));
        assert!(d.pins_left.is_empty());
    }

    #[test]
    fn test_spare_frame() {
        let game = parse_game("9/").unwrap();
        assert_eq!(game.deliveries[0].mark, Mark::Leave);
        assert_eq!(game.deliveries[0].pins_left, set(&[10]));
        assert_eq!(game.deliveries[1].mark, Mark::Spare);
        assert!(game.deliveries[1].pins_left.is_empty());
    }

    #[test]
    fn test_open_frame_leaves_highest_pins() {
        let game = parse_game("72").unwrap();
        // 7 down leaves {8, 9, 10}; 2 more leaves the highest single pin.
        assert_eq!(game.deliveries[0].pins_left, set(&[8, 9, 10]));
        assert_eq!(game.deliveries[1].pins_left, set(&[10]));
        assert_eq!(game.deliveries[1].mark, Mark::Open);
    }

    #[test]
    fn test_open_that_clears_the_deck() {
        // "91" knocks the last pin with an explicit open, not a spare.
        let game = parse_game("91").unwrap();
        assert_eq!(game.deliveries[1].mark, Mark::Open);
        assert!(game.deliveries[1].pins_left.is_empty());
    }

    #[test]
    fn test_miss_char() {
        let game = parse_game("--").unwrap();
        assert_eq!(game.deliveries[0].pins_left, PinSet::FULL);
        assert_eq!(game.deliveries[1].pins_left, PinSet::FULL);
    }

    #[test]
    fn test_sequence_and_frames_assigned() {
        let game = parse_game("X 9/ 72").unwrap();
        let seq: Vec<u32> = game.deliveries.iter().map(|d| d.sequence).collect();
        assert_eq!(seq, vec![1, 2, 3, 4, 5]);
        let frames: Vec<u8> = game.deliveries.iter().map(|d| d.frame).collect();
        assert_eq!(frames, vec![1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_trailing_partial_frame() {
        let game = parse_game("X 5").unwrap();
        assert_eq!(game.deliveries.len(), 2);
        assert_eq!(game.deliveries[1].mark, Mark::Leave);
        assert_eq!(game.deliveries[1].pins_left.len(), 5);
    }

    #[test]
    fn test_partial_frame_mid_log_rejected() {
        assert!(parse_game("5 X").is_none());
    }

    #[test]
    fn test_tenth_frame_triple_strike() {
        let game = parse_game("X X X X X X X X X XXX").unwrap();
        assert_eq!(game.deliveries.len(), 12);
        let tenth: Vec<Mark> = game.frame(10).map(|d| d.mark).collect();
        assert_eq!(tenth, vec![Mark::Strike, Mark::Strike, Mark::Strike]);
    }

    #[test]
    fn test_tenth_frame_strike_then_spare() {
        let game = parse_game("X X X X X X X X X X9/").unwrap();
        let tenth: Vec<Mark> = game.frame(10).map(|d| d.mark).collect();
        assert_eq!(tenth, vec![Mark::Strike, Mark::Leave, Mark::Spare]);
    }

    #[test]
    fn test_tenth_frame_spare_then_fill() {
        let game = parse_game("X X X X X X X X X 7/X").unwrap();
        let tenth: Vec<Mark> = game.frame(10).map(|d| d.mark).collect();
        assert_eq!(tenth, vec![Mark::Leave, Mark::Spare, Mark::Strike]);
    }

    #[test]
    fn test_tenth_frame_unearned_fill_rejected() {
        assert!(parse_game("X X X X X X X X X 721").is_none());
    }

    #[test]
    fn test_too_many_pins_rejected() {
        assert!(parse_game("78").is_none());
    }

    #[test]
    fn test_unknown_roll_char_rejected() {
        assert!(parse_game("X Q").is_none());
        assert!(parse_game("/5").is_none());
    }

    #[test]
    fn test_eleven_frames_rejected() {
        assert!(parse_game("X X X X X X X X X X X").is_none());
    }

    #[test]
    fn test_lowercase_accepted() {
        let game = parse_game("x 9/").unwrap();
        assert_eq!(game.deliveries[0].mark, Mark::Strike);
    }
}
