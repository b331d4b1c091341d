use clap::Parser;
use pindeck_cli::sheet_format::{format_sheet, format_split_notes};
use pindeck_engine::{random_game, score_sheet};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for reproducible games; random otherwise
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of games to roll
    #[arg(short, long, default_value_t = 1)]
    count: u32,

    /// Print each game's delivery log as JSON instead of a score sheet
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for game_number in 1..=args.count {
        let game = random_game(&mut rng);
        if args.json {
            println!(
                "{}",
                serde_json::to_string(&game.deliveries).expect("delivery logs always serialize")
            );
            continue;
        }
        if args.count > 1 {
            println!("Game {}", game_number);
        }
        print!("{}", format_sheet(&score_sheet(&game.deliveries)));
        let notes = format_split_notes(&game.deliveries);
        if !notes.is_empty() {
            print!("{}", notes);
        }
        println!();
    }
}
