use clap::Parser;
use pindeck_cli::sheet_format::{format_sheet, format_split_notes};
use pindeck_core::delivery::Delivery;
use pindeck_core::io::notation;
use pindeck_engine::score_sheet;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a delivery log: a JSON array, or YAML with a .yaml/.yml
    /// extension
    log: Option<PathBuf>,

    /// Shorthand frames notation instead of a log file, e.g. "X 9/ 72"
    #[arg(short, long)]
    frames: Option<String>,
}

fn resolve_deliveries(args: &Args) -> Result<Vec<Delivery>, String> {
    if let Some(frames) = &args.frames {
        let game = notation::parse_game(frames)
            .ok_or_else(|| format!("invalid frames notation: {:?}", frames))?;
        return Ok(game.deliveries);
    }
    let Some(path) = &args.log else {
        return Err("provide a log file or --frames".to_string());
    };
    let content =
        fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let deliveries = match resolve_deliveries(&args) {
        Ok(d) => d,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    let sheet = score_sheet(&deliveries);
    if let Some(fault) = &sheet.fault {
        // Bad rows degrade the sheet to blank cells; the sheet still prints.
        eprintln!("Warning: {}", fault);
    }
    print!("{}", format_sheet(&sheet));

    let notes = format_split_notes(&deliveries);
    if !notes.is_empty() {
        println!();
        print!("{}", notes);
    }
    ExitCode::SUCCESS
}
