#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! Underkeep: a turn-based, room-and-inventory text adventure.
//!
//! The interesting machinery is the command-interpretation and
//! effect-propagation core: [`parse`] turns tokens into validated
//! [`Action`]s, and [`turn`] narrates each action and propagates it to
//! every world object that might react, breadth-first, to a fixed point.

pub const UNDERKEEP_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod action;
pub mod command;
pub mod dungeon;
pub mod location;
pub mod parse;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod text;
pub mod thing;
pub mod things;
pub mod turn;
pub mod world;

// Re-exports for convenience
pub use action::{Action, Narration, Speaker};
pub use command::parse_command;
pub use dungeon::build_demo_world;
pub use location::{Contents, Location, PlacedThing};
pub use parse::{CommandError, Parse, arg, args, implicit};
pub use player::Player;
pub use repl::run_repl;
pub use room::{Direction, Door, Room, RoomId};
pub use thing::{Strike, Thing, ThingId};
pub use turn::{Outcome, run_turn};
pub use world::{Registry, Spot, World};
