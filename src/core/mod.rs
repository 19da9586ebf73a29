//! Core building blocks: elements, seats, and deterministic RNG.
//!
//! These types carry no game-flow logic of their own; the `zones` and
//! `game` modules build on them.

pub mod element;
pub mod rng;
pub mod seat;

pub use element::Element;
pub use rng::GameRng;
pub use seat::Seat;
