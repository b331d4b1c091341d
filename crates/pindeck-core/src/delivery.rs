use crate::pinset::PinSet;
use crate::splits;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared outcome of a delivery. "Leave" is a non-final ball that did not
/// clear the deck; "Open" closes a frame with pins (possibly zero) still
/// counted off the previous leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Strike,
    Spare,
    Leave,
    Open,
}

impl Mark {
    /// True when the delivery cleared all standing pins and (in the tenth
    /// frame) the deck is re-racked for the next ball.
    pub fn clears_deck(self) -> bool {
        matches!(self, Mark::Strike | Mark::Spare)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Strike => "Strike",
            Mark::Spare => "Spare",
            Mark::Leave => "Leave",
            Mark::Open => "Open",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One ball rolled, immutable once recorded.
///
/// `pins_left` is the canonical record of the delivery; everything else the
/// scorer needs (pinfall, bonuses) is derived from the pins-left chain.
/// `split` is a display annotation derived at construction time and is never
/// consulted for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub sequence: u32,
    pub frame: u8,
    pub ball: u8,
    pub mark: Mark,
    pub pins_left: PinSet,
    #[serde(default)]
    pub split: bool,
}

impl Delivery {
    pub fn new(sequence: u32, frame: u8, ball: u8, mark: Mark, pins_left: PinSet) -> Self {
        let split = ball == 1 && mark == Mark::Leave && splits::is_split(pins_left);
        Self {
            sequence,
            frame,
            ball,
            mark,
            pins_left,
            split,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(numbers: &[u8]) -> PinSet {
        PinSet::from_numbers(numbers).unwrap()
    }

    #[test]
    fn test_strike_has_no_split() {
        let d = Delivery::new(1, 1, 1, Mark::Strike, PinSet::EMPTY);
        assert!(!d.split);
    }

    #[test]
    fn test_first_ball_split_leave() {
        let d = Delivery::new(1, 3, 1, Mark::Leave, set(&[7, 10]));
        assert!(d.split);
    }

    #[test]
    fn test_connected_leave_is_not_split() {
        let d = Delivery::new(1, 3, 1, Mark::Leave, set(&[2, 4, 5]));
        assert!(!d.split);
    }

    #[test]
    fn test_second_ball_leave_unflagged() {
        // Fill-ball leaves are not annotated, matching the recorded logs.
        let d = Delivery::new(20, 10, 2, Mark::Leave, set(&[7, 10]));
        assert!(!d.split);
    }

    #[test]
    fn test_serde_roundtrip() {
        let d = Delivery::new(4, 2, 2, Mark::Open, set(&[10]));
        let json = serde_json::to_string(&d).unwrap();
        let back: Delivery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_deserialize_without_split_field() {
        let json = r#"{"sequence":1,"frame":1,"ball":1,"mark":"Strike","pins_left":[]}"#;
        let d: Delivery = serde_json::from_str(json).unwrap();
        assert_eq!(d.mark, Mark::Strike);
        assert!(!d.split);
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::Strike.to_string(), "Strike");
        assert_eq!(Mark::Open.to_string(), "Open");
    }
}
