use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the ten pins, numbered as racked:
///
/// ```text
/// 7   8   9   10
///   4   5   6
///     2   3
///       1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pin {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
}

impl Pin {
    pub const ALL: [Pin; 10] = [
        Pin::One,
        Pin::Two,
        Pin::Three,
        Pin::Four,
        Pin::Five,
        Pin::Six,
        Pin::Seven,
        Pin::Eight,
        Pin::Nine,
        Pin::Ten,
    ];

    /// The headpin; a leave that includes it is never a split.
    pub const HEAD: Pin = Pin::One;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn idx(self) -> usize {
        self as usize - 1
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Pin::One),
            2 => Some(Pin::Two),
            3 => Some(Pin::Three),
            4 => Some(Pin::Four),
            5 => Some(Pin::Five),
            6 => Some(Pin::Six),
            7 => Some(Pin::Seven),
            8 => Some(Pin::Eight),
            9 => Some(Pin::Nine),
            10 => Some(Pin::Ten),
            _ => None,
        }
    }

    /// Pins physically touching this one on the deck.
    pub fn neighbors(self) -> &'static [Pin] {
        match self {
            Pin::One => &[Pin::Two, Pin::Three],
            Pin::Two => &[Pin::One, Pin::Three, Pin::Four, Pin::Five],
            Pin::Three => &[Pin::One, Pin::Two, Pin::Five, Pin::Six],
            Pin::Four => &[Pin::Two, Pin::Five, Pin::Seven, Pin::Eight],
            Pin::Five => &[
                Pin::Two,
                Pin::Three,
                Pin::Four,
                Pin::Six,
                Pin::Eight,
                Pin::Nine,
            ],
            Pin::Six => &[Pin::Three, Pin::Five, Pin::Nine, Pin::Ten],
            Pin::Seven => &[Pin::Four, Pin::Eight],
            Pin::Eight => &[Pin::Four, Pin::Five, Pin::Seven, Pin::Nine],
            Pin::Nine => &[Pin::Five, Pin::Six, Pin::Eight, Pin::Ten],
            Pin::Ten => &[Pin::Six, Pin::Nine],
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_roundtrip() {
        for pin in Pin::ALL {
            assert_eq!(Pin::from_number(pin.number()), Some(pin));
        }
        assert_eq!(Pin::from_number(0), None);
        assert_eq!(Pin::from_number(11), None);
    }

    #[test]
    fn test_neighbors_are_symmetric() {
        for pin in Pin::ALL {
            for &n in pin.neighbors() {
                assert!(
                    n.neighbors().contains(&pin),
                    "{} lists {} but not vice versa",
                    pin,
                    n
                );
            }
        }
    }

    #[test]
    fn test_corner_pins() {
        assert_eq!(Pin::Seven.neighbors(), &[Pin::Four, Pin::Eight]);
        assert_eq!(Pin::Ten.neighbors(), &[Pin::Six, Pin::Nine]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pin::Ten.to_string(), "10");
        assert_eq!(Pin::One.to_string(), "1");
    }
}
