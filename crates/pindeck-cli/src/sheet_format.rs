use pindeck_core::delivery::Delivery;
use pindeck_core::splits;
use pindeck_engine::ScoreSheet;
use std::fmt::Write;

/// Renders a score sheet as a plain-text table:
///
/// ```text
/// Frame | 1   | 2   | ... | 10    | Total | Max
/// Rolls | X   | 9 / | ... | X X X |       |
/// Score | 20  | 37  | ... | 267   | 267   | 267
/// ```
pub fn format_sheet(sheet: &ScoreSheet) -> String {
    let rolls: Vec<String> = sheet.frames.iter().map(|f| f.rolls.join(" ")).collect();
    let scores: Vec<String> = sheet
        .frames
        .iter()
        .map(|f| f.cumulative.map(|c| c.to_string()).unwrap_or_default())
        .collect();
    let widths: Vec<usize> = (0..10)
        .map(|i| {
            let header = (i + 1).to_string();
            header.len().max(rolls[i].len()).max(scores[i].len())
        })
        .collect();

    let mut out = String::new();
    write!(out, "Frame").unwrap();
    for (i, &w) in widths.iter().enumerate() {
        write!(out, " | {:<w$}", i + 1, w = w).unwrap();
    }
    writeln!(out, " | Total | Max").unwrap();

    write!(out, "Rolls").unwrap();
    for (roll, &w) in rolls.iter().zip(&widths) {
        write!(out, " | {:<w$}", roll, w = w).unwrap();
    }
    writeln!(out, " | {:<5} | {:<3}", "", "").unwrap();

    write!(out, "Score").unwrap();
    for (score, &w) in scores.iter().zip(&widths) {
        write!(out, " | {:<w$}", score, w = w).unwrap();
    }
    writeln!(out, " | {:<5} | {:<3}", sheet.total, sheet.max_possible).unwrap();
    out
}

/// One line per recorded split leave, naming the catalog pattern when the
/// leave has one.
pub fn format_split_notes(deliveries: &[Delivery]) -> String {
    let mut out = String::new();
    for d in deliveries.iter().filter(|d| d.split) {
        match splits::split_name(d.pins_left) {
            Some(name) => {
                writeln!(out, "Frame {}: left {} ({})", d.frame, d.pins_left, name).unwrap()
            }
            None => writeln!(out, "Frame {}: left {} (split)", d.frame, d.pins_left).unwrap(),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pindeck_core::game::Game;
    use pindeck_engine::score_sheet;

    #[test]
    fn test_format_sheet_has_three_rows() {
        let sheet = score_sheet(&Game::parse("X 9/ 72").deliveries);
        let text = format_sheet(&sheet);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Frame"));
        assert!(lines[1].contains("9 /"));
        assert!(lines[2].contains("46"));
    }

    #[test]
    fn test_format_sheet_blank_cells_for_undetermined() {
        let sheet = score_sheet(&Game::parse("X").deliveries);
        let text = format_sheet(&sheet);
        assert!(text.contains("| 300"));
    }

    #[test]
    fn test_split_notes() {
        use pindeck_core::delivery::Mark;
        use pindeck_core::pinset::PinSet;

        let bedposts =
            Delivery::new(1, 1, 1, Mark::Leave, PinSet::from_numbers(&[7, 10]).unwrap());
        let unnamed =
            Delivery::new(3, 2, 1, Mark::Leave, PinSet::from_numbers(&[4, 10]).unwrap());
        let notes = format_split_notes(&[bedposts, unnamed]);
        assert!(notes.contains("Frame 1: left 7, 10 (Bedposts)"));
        assert!(notes.contains("Frame 2: left 4, 10 (split)"));
    }

    #[test]
    fn test_no_split_notes_for_clean_game() {
        let game = Game::parse("X 9/ 72");
        assert!(format_split_notes(&game.deliveries).is_empty());
    }
}
