//! Rooms, doors, and directions.
//!
//! The room graph is wired once, before play begins, via
//! [`crate::world::World::connect`]. Wiring two doors in the same direction
//! is a world-authoring bug and panics immediately rather than surfacing as
//! a runtime error.

use std::collections::BTreeMap;
use std::fmt;

use crate::location::{Contents, Location, PlacedThing};
use crate::text::a;
use crate::thing::ThingId;
use crate::world::Registry;

/// Identity of a room for the life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u32);

/// Compass-and-ladder directions a door can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Parse a direction from a command token. Single-letter shorthand works.
    pub fn from_token(token: &str) -> Option<Direction> {
        match token.to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{name}")
    }
}

/// A doorway shared by two rooms. Given the room you are coming from, it
/// resolves to the room on the other side.
#[derive(Debug, Clone)]
pub struct Door {
    pub description: String,
    between: (RoomId, RoomId),
}

impl Door {
    pub fn new(description: &str, a: RoomId, b: RoomId) -> Self {
        Self {
            description: description.to_string(),
            between: (a, b),
        }
    }

    pub fn from_room(&self, room: RoomId) -> RoomId {
        if self.between.0 == room {
            self.between.1
        } else {
            self.between.0
        }
    }
}

/// Any visitable location in the game world.
#[derive(Debug)]
pub struct Room {
    pub id: RoomId,
    description: String,
    doors: BTreeMap<Direction, Door>,
    contents: Contents,
}

impl Room {
    pub fn new(id: RoomId, description: &str) -> Self {
        Self {
            id,
            description: description.to_string(),
            doors: BTreeMap::new(),
            contents: Contents::new(),
        }
    }

    /// Base description followed by one sentence per thing placed here.
    pub fn describe(&self, things: &Registry) -> String {
        let mut parts = vec![self.description.clone()];
        for placed in self.contents.placed() {
            if let Some(thing) = things.get(placed.id) {
                parts.push(format!("There is {} {}.", a(&thing.describe()), placed.place));
            }
        }
        parts.join(" ")
    }

    pub fn door_to(&self, direction: Direction) -> Option<&Door> {
        self.doors.get(&direction)
    }

    /// Hang a door in the given direction. Panics if one is already there;
    /// the room graph is authored before play and double-wiring is a bug.
    pub(crate) fn add_door(&mut self, direction: Direction, door: Door) {
        assert!(
            !self.doors.contains_key(&direction),
            "room {:?} already has a door to the {direction}",
            self.id
        );
        self.doors.insert(direction, door);
    }
}

impl Location for Room {
    fn place(&mut self, thing: ThingId, place: &str) {
        self.contents.place(thing, place);
    }

    fn remove(&mut self, thing: ThingId) {
        self.contents.remove(thing);
    }

    fn find(&self, name: &str, things: &Registry) -> Option<ThingId> {
        self.contents.find(name, things)
    }

    fn placed(&self) -> &[PlacedThing] {
        self.contents.placed()
    }
}
