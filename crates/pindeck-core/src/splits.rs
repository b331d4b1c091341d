//! Split detection and the named-split catalog.
//!
//! A leave is a split when the standing pins are not all mutually reachable
//! through other standing pins in the deck adjacency graph. The catalog maps
//! well-known leaves to their conventional names ("Bedposts", "Big Four", …)
//! and also covers the adjacent-pin "fit splits", which carry a name even
//! though they are not splits in the connectivity sense.

use crate::pin::Pin;
use crate::pinset::PinSet;
use once_cell::sync::Lazy;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPattern {
    pub pins: PinSet,
    pub name: &'static str,
    pub category: &'static str,
}

static CATALOG: Lazy<Vec<SplitPattern>> = Lazy::new(|| {
    let entries: &[(&[u8], &str, &str)] = &[
        (&[7, 10], "Bedposts", "Extreme Wide"),
        (&[4, 6, 7, 10], "Big Four", "Extreme Wide"),
        (&[4, 6, 7, 8, 10], "Greek Church (Right Hand)", "Complex Split"),
        (&[4, 6, 7, 9, 10], "Greek Church (Left Hand)", "Complex Split"),
        (&[2, 4, 6, 7, 10], "Big Five (Right Hand)", "Complex Split"),
        (&[3, 4, 6, 7, 10], "Big Five (Left Hand)", "Complex Split"),
        (&[5, 7, 10], "Sour Apple / Lily", "Middle Split"),
        (&[2, 7], "Baby Split (Right Hand)", "Baby Split"),
        (&[3, 10], "Baby Split (Left Hand)", "Baby Split"),
        (&[5, 7], "Dime Store (Right Hand)", "Dime Store"),
        (&[5, 10], "Dime Store (Left Hand)", "Dime Store"),
        (&[4, 5], "Steam Fitter", "Fit Split"),
        (&[5, 6], "Fit Split", "Fit Split"),
        (&[2, 3], "Fit Split", "Fit Split"),
        (&[7, 8], "Back Row Fit Split", "Fit Split"),
        (&[9, 10], "Back Row Fit Split", "Fit Split"),
        (&[4, 9], "Parallel Split", "Distant Split"),
        (&[6, 8], "Parallel Split", "Distant Split"),
        (&[4, 7, 10], "Corner Split", "Triangular"),
        (&[6, 7, 10], "Corner Split", "Triangular"),
        (&[2, 7, 10], "Christmas Tree", "Triangular"),
        (&[3, 7, 10], "Christmas Tree", "Triangular"),
        (&[7, 9], "Cincinnati", "Back Row"),
        (&[8, 10], "Cincinnati", "Back Row"),
        (&[4, 6], "Golden Gate / Cincinnati", "Middle Row"),
    ];
    entries
        .iter()
        .map(|&(numbers, name, category)| SplitPattern {
            pins: PinSet::from_numbers(numbers).expect("catalog pins are 1-10"),
            name,
            category,
        })
        .collect()
});

static BY_PINS: Lazy<HashMap<PinSet, &'static SplitPattern>> =
    Lazy::new(|| CATALOG.iter().map(|p| (p.pins, p)).collect());

/// All catalog entries, in their published order.
pub fn catalog() -> &'static [SplitPattern] {
    &CATALOG
}

/// Whether a leave is a split: the headpin is down, at least two pins stand,
/// and the standing pins do not form one connected group.
pub fn is_split(pins: PinSet) -> bool {
    if pins.len() < 2 || pins.contains(Pin::HEAD) {
        return false;
    }
    let standing = pins.pins();
    for pair in standing.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.neighbors().contains(&b) {
            continue;
        }
        if !reachable(a, b, pins) {
            return true;
        }
    }
    false
}

/// Breadth-first search from `from` to `to`, stepping only on standing pins.
fn reachable(from: Pin, to: Pin, standing: PinSet) -> bool {
    let mut visited = PinSet::new();
    visited.insert(from);
    let mut queue = VecDeque::new();
    queue.push_back(from);
    while let Some(current) = queue.pop_front() {
        if current == to {
            return true;
        }
        for &neighbor in current.neighbors() {
            if standing.contains(neighbor) && !visited.contains(neighbor) {
                visited.insert(neighbor);
                queue.push_back(neighbor);
            }
        }
    }
    false
}

/// Exact catalog lookup for a leave. Headpin or single-pin leaves never
/// match; an unlisted leave returns None even when `is_split` is true.
pub fn split_pattern(pins: PinSet) -> Option<&'static SplitPattern> {
    if pins.len() < 2 || pins.contains(Pin::HEAD) {
        return None;
    }
    BY_PINS.get(&pins).copied()
}

pub fn split_name(pins: PinSet) -> Option<&'static str> {
    split_pattern(pins).map(|p| p.name)
}
