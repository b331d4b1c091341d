//! Defensive validation of a delivery log.
//!
//! The persistence shell owns ordering and numbering, but a corrupted or
//! hand-edited row must never turn into a plausible-looking score. The scan
//! stops at the first structural violation; everything before it is trusted,
//! the offending frame and everything after it render as undetermined.

use pindeck_core::delivery::{Delivery, Mark};
use pindeck_core::pinset::PinSet;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaultKind {
    FrameOutOfRange,
    BallOutOfRange,
    SequenceOutOfOrder,
    FrameOutOfOrder,
    BallOutOfOrder,
    TooManyDeliveries,
    PinsNotSubset,
    MarkMismatch,
}

impl FaultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FaultKind::FrameOutOfRange => "frame number out of range",
            FaultKind::BallOutOfRange => "ball number out of range",
            FaultKind::SequenceOutOfOrder => "sequence numbers not increasing",
            FaultKind::FrameOutOfOrder => "frames out of order",
            FaultKind::BallOutOfOrder => "ball numbers out of order",
            FaultKind::TooManyDeliveries => "too many deliveries in frame",
            FaultKind::PinsNotSubset => "pins left is not a subset of pins standing",
            FaultKind::MarkMismatch => "mark contradicts recorded pins",
        }
    }
}

/// A malformed delivery record, attributed to the frame it corrupts.
/// Distinct from "no data yet": both render as blank score cells, but a
/// fault is surfaced to the caller for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fault {
    pub frame: u8,
    pub kind: FaultKind,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {}: {}", self.frame, self.kind.as_str())
    }
}

/// Checks the whole log, reporting the first malformed record.
pub fn validate(deliveries: &[Delivery]) -> Result<(), Fault> {
    match first_fault(deliveries) {
        Some((_, fault)) => Err(fault),
        None => Ok(()),
    }
}

/// The trusted prefix of the log: deliveries before the first fault.
pub(crate) fn trusted_prefix(deliveries: &[Delivery]) -> (&[Delivery], Option<Fault>) {
    match first_fault(deliveries) {
        Some((index, fault)) => (&deliveries[..index], Some(fault)),
        None => (deliveries, None),
    }
}

fn first_fault(deliveries: &[Delivery]) -> Option<(usize, Fault)> {
    let mut tenth_first_mark = None;
    for (i, d) in deliveries.iter().enumerate() {
        let fault = |kind| Some((i, Fault { frame: d.frame, kind }));

        if d.frame < 1 || d.frame > 10 {
            return fault(FaultKind::FrameOutOfRange);
        }
        if d.ball < 1 || d.ball > 3 || (d.frame < 10 && d.ball > 2) {
            return fault(FaultKind::BallOutOfRange);
        }

        let prev = if i > 0 { Some(&deliveries[i - 1]) } else { None };
        match prev {
            None => {
                if d.frame != 1 {
                    return fault(FaultKind::FrameOutOfOrder);
                }
                if d.ball != 1 {
                    return fault(FaultKind::BallOutOfOrder);
                }
            }
            Some(p) => {
                if d.sequence <= p.sequence {
                    return fault(FaultKind::SequenceOutOfOrder);
                }
                if d.frame == p.frame {
                    if d.ball != p.ball + 1 {
                        return fault(FaultKind::BallOutOfOrder);
                    }
                    if d.frame < 10 && p.mark == Mark::Strike {
                        return fault(FaultKind::TooManyDeliveries);
                    }
                    if d.ball == 3
                        && tenth_first_mark != Some(Mark::Strike)
                        && p.mark != Mark::Spare
                    {
                        // The fill ball has to be earned.
                        return fault(FaultKind::TooManyDeliveries);
                    }
                } else if d.frame == p.frame + 1 {
                    if d.ball != 1 {
                        return fault(FaultKind::BallOutOfOrder);
                    }
                    // The previous frame must be structurally closed.
                    if p.mark == Mark::Leave {
                        return fault(FaultKind::FrameOutOfOrder);
                    }
                } else {
                    return fault(FaultKind::FrameOutOfOrder);
                }
            }
        }

        if d.frame == 10 && d.ball == 1 {
            tenth_first_mark = Some(d.mark);
        }

        let before = pins_before(deliveries, i);
        if !d.pins_left.is_subset_of(before) {
            return fault(FaultKind::PinsNotSubset);
        }
        if let Some(kind) = mark_fault(d, prev, before) {
            return fault(kind);
        }
    }
    None
}

/// The deck a delivery was rolled at: full for a first ball, the previous
/// leave otherwise, with the tenth frame re-racking after a strike or spare.
pub(crate) fn pins_before(deliveries: &[Delivery], i: usize) -> PinSet {
    let d = &deliveries[i];
    if d.ball == 1 || i == 0 {
        return PinSet::FULL;
    }
    let prev = &deliveries[i - 1];
    if prev.mark.clears_deck() {
        PinSet::FULL
    } else {
        prev.pins_left
    }
}

fn mark_fault(d: &Delivery, prev: Option<&Delivery>, before: PinSet) -> Option<FaultKind> {
    let fresh_deck = before.is_full();
    match d.mark {
        Mark::Strike => {
            // Only a full deck can be struck, and nothing may stand after.
            if !fresh_deck || !d.pins_left.is_empty() {
                return Some(FaultKind::MarkMismatch);
            }
        }
        Mark::Spare => {
            let follows_leave =
                prev.is_some_and(|p| p.frame == d.frame && p.mark == Mark::Leave);
            if !follows_leave || !d.pins_left.is_empty() {
                return Some(FaultKind::MarkMismatch);
            }
        }
        Mark::Leave => {
            // A leave is a non-clearing ball at a fresh deck; anything later
            // in the frame is an open.
            if !fresh_deck || d.pins_left.is_empty() {
                return Some(FaultKind::MarkMismatch);
            }
        }
        Mark::Open => {
            let follows_leave =
                prev.is_some_and(|p| p.frame == d.frame && p.mark == Mark::Leave);
            if !follows_leave {
                return Some(FaultKind::MarkMismatch);
            }
        }
    }
    None
}
