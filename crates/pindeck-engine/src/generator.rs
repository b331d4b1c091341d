//! Random game simulation, for demos and shell smoke-testing.

use pindeck_core::delivery::{Delivery, Mark};
use pindeck_core::game::Game;
use pindeck_core::pinset::PinSet;
use rand::seq::SliceRandom;
use rand::Rng;

/// Simulates a complete legal game with uniformly random pinfall.
pub fn random_game<R: Rng>(rng: &mut R) -> Game {
    let mut game = Game::new();
    let mut sequence = 0;

    for frame in 1..=9u8 {
        let first_left = roll(rng, PinSet::FULL);
        push(&mut game, &mut sequence, frame, 1, first_mark(first_left), first_left);
        if first_left.is_empty() {
            continue;
        }
        let second_left = roll(rng, first_left);
        let mark = if second_left.is_empty() {
            Mark::Spare
        } else {
            Mark::Open
        };
        push(&mut game, &mut sequence, frame, 2, mark, second_left);
    }

    // Frame 10: the deck re-racks after a strike or spare, and a strike or
    // spare earns a third ball.
    let first_left = roll(rng, PinSet::FULL);
    let first = first_mark(first_left);
    push(&mut game, &mut sequence, 10, 1, first, first_left);

    let second_deck = if first == Mark::Strike {
        PinSet::FULL
    } else {
        first_left
    };
    let second_left = roll(rng, second_deck);
    let second = if first == Mark::Strike {
        first_mark(second_left)
    } else if second_left.is_empty() {
        Mark::Spare
    } else {
        Mark::Open
    };
    push(&mut game, &mut sequence, 10, 2, second, second_left);

    if first != Mark::Strike && second != Mark::Spare {
        return game;
    }
    let third_deck = if second.clears_deck() {
        PinSet::FULL
    } else {
        second_left
    };
    let third_left = roll(rng, third_deck);
    let third = if third_deck.is_full() {
        first_mark(third_left)
    } else if third_left.is_empty() {
        Mark::Spare
    } else {
        Mark::Open
    };
    push(&mut game, &mut sequence, 10, 3, third, third_left);
    game
}

fn first_mark(left: PinSet) -> Mark {
    if left.is_empty() {
        Mark::Strike
    } else {
        Mark::Leave
    }
}

/// Knocks down a uniformly random portion of the standing pins and returns
/// the leave.
fn roll<R: Rng>(rng: &mut R, standing: PinSet) -> PinSet {
    let mut pins = standing.pins();
    pins.shuffle(rng);
    let downed = rng.gen_range(0..=pins.len());
    pins[downed..].iter().copied().collect()
}

fn push(game: &mut Game, sequence: &mut u32, frame: u8, ball: u8, mark: Mark, left: PinSet) {
    *sequence += 1;
    game.push(Delivery::new(*sequence, frame, ball, mark, left));
}
