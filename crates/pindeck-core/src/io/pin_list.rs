use crate::pin::Pin;
use crate::pinset::PinSet;
use once_cell::sync::Lazy;
use regex::Regex;

static PIN_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("static pattern"));

/// Parses a stored pins-left string like "7, 10" (or "7 10").
///
/// This is the row format older score logs persisted. Lenient by design:
/// non-numeric tokens (including "N/A") and out-of-range numbers are
/// skipped, so a dirty row degrades to a smaller set instead of failing the
/// whole import.
pub fn parse_pin_list(s: &str) -> PinSet {
    PIN_NUMBER
        .find_iter(s)
        .filter_map(|m| m.as_str().parse::<u8>().ok())
        .filter_map(Pin::from_number)
        .collect()
}
