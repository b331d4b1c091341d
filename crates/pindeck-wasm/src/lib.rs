use wasm_bindgen::prelude::*;

/// Scores a delivery log (a JSON array of delivery records) and returns the
/// per-frame cells, running total, max possible, and any data fault.
/// Returns null if the log does not parse.
#[wasm_bindgen]
pub fn score_log(log_json: &str) -> JsValue {
    match pindeck_engine::score_log_json(log_json) {
        Ok(score) => serde_wasm_bindgen::to_value(&score).unwrap(),
        Err(_) => JsValue::NULL,
    }
}

/// Like score_log, but returns the full score-sheet display model with roll
/// symbols per frame.
#[wasm_bindgen]
pub fn sheet_log(log_json: &str) -> JsValue {
    match pindeck_engine::sheet_log_json(log_json) {
        Ok(sheet) => serde_wasm_bindgen::to_value(&sheet).unwrap(),
        Err(_) => JsValue::NULL,
    }
}

/// Scores shorthand frames notation like "X 9/ 72". Returns null on
/// malformed notation.
#[wasm_bindgen]
pub fn score_frames(frames: &str) -> JsValue {
    match pindeck_engine::score_notation(frames) {
        Some(score) => serde_wasm_bindgen::to_value(&score).unwrap(),
        None => JsValue::NULL,
    }
}

/// Whether a leave (pin numbers 1-10) is a split.
#[wasm_bindgen]
pub fn is_split_leave(pins: Vec<u8>) -> bool {
    match pindeck_engine::PinSet::from_numbers(&pins) {
        Some(set) => pindeck_engine::splits::is_split(set),
        None => false,
    }
}

/// The catalog name for a leave ("Bedposts", "Big Four", …), if it has one.
#[wasm_bindgen]
pub fn split_name_for(pins: Vec<u8>) -> Option<String> {
    let set = pindeck_engine::PinSet::from_numbers(&pins)?;
    pindeck_engine::splits::split_name(set).map(str::to_string)
}

/// Simulates a random complete game and returns its delivery log as JSON.
#[wasm_bindgen]
pub fn generate_random_game() -> String {
    pindeck_engine::generate_random_game_json()
}
