//! Core engine types: moves, scores, players, clocks, RNG.
//!
//! Everything here is game-agnostic; the board itself lives behind the
//! `rules::GameState` trait.

pub mod position;
pub mod player;
pub mod clock;
pub mod rng;

pub use position::{Move, MoveList, Score};
pub use player::{PlayerId, PlayerMap};
pub use clock::{CountdownProbe, Deadline, TimeProbe, Unlimited};
pub use rng::GameRng;
