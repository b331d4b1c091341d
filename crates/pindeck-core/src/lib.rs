pub mod pin;
pub mod pinset;
pub mod delivery;
pub mod game;
pub mod splits;
pub mod io;

pub use pin::Pin;
pub use pinset::PinSet;
pub use delivery::{Delivery, Mark};
pub use game::Game;
