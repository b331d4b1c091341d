use crate::pin::Pin;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A set of pins, used for "pins left standing" after a delivery.
///
/// Backed by a bitmask, but serialized as a sorted list of pin numbers so
/// persisted logs stay readable (`[7, 10]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct PinSet(u16);

const FULL_MASK: u16 = 0x3FF;

impl PinSet {
    pub const EMPTY: PinSet = PinSet(0);
    pub const FULL: PinSet = PinSet(FULL_MASK);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn from_pins(pins: &[Pin]) -> Self {
        pins.iter().copied().collect()
    }

    /// Builds a set from pin numbers; None if any number is not 1-10.
    pub fn from_numbers(numbers: &[u8]) -> Option<Self> {
        let mut set = Self::new();
        for &n in numbers {
            set.insert(Pin::from_number(n)?);
        }
        Some(set)
    }

    pub fn contains(self, pin: Pin) -> bool {
        self.0 & bit(pin) != 0
    }

    pub fn insert(&mut self, pin: Pin) {
        self.0 |= bit(pin);
    }

    pub fn remove(&mut self, pin: Pin) {
        self.0 &= !bit(pin);
    }

    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_full(self) -> bool {
        self.0 == FULL_MASK
    }

    pub fn is_subset_of(self, other: PinSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Pins in ascending number order.
    pub fn iter(self) -> impl Iterator<Item = Pin> {
        Pin::ALL.into_iter().filter(move |&p| self.contains(p))
    }

    pub fn pins(self) -> Vec<Pin> {
        self.iter().collect()
    }

    pub fn numbers(self) -> Vec<u8> {
        self.iter().map(Pin::number).collect()
    }
}

fn bit(pin: Pin) -> u16 {
    1 << pin.idx()
}

impl FromIterator<Pin> for PinSet {
    fn from_iter<I: IntoIterator<Item = Pin>>(iter: I) -> Self {
        let mut set = PinSet::new();
        for pin in iter {
            set.insert(pin);
        }
        set
    }
}

impl From<PinSet> for Vec<u8> {
    fn from(set: PinSet) -> Self {
        set.numbers()
    }
}

impl TryFrom<Vec<u8>> for PinSet {
    type Error = String;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        PinSet::from_numbers(&numbers)
            .ok_or_else(|| format!("pin numbers out of range: {:?}", numbers))
    }
}

impl fmt::Display for PinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pin in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", pin)?;
            first = false;
        }
        Ok(())
    }
}
