//! The game world: every thing, every room, and the player.
//!
//! Things live in a central [`Registry`] keyed by [`ThingId`]; rooms and the
//! player's inventory hold ids only. [`World::move_thing`] is the single
//! ownership-transfer point, which keeps the invariant that a thing is
//! placed in at most one location at a time.

use std::collections::BTreeMap;

use anyhow::{Result, anyhow};
use log::{info, warn};

use crate::location::Location;
use crate::player::Player;
use crate::room::{Direction, Door, Room, RoomId};
use crate::thing::{Thing, ThingId};

/// Owner of every `Thing` in the session. Identity is a dense id handed out
/// at spawn time.
#[derive(Default)]
pub struct Registry {
    things: BTreeMap<ThingId, Box<dyn Thing>>,
    next_id: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id and build the thing around it.
    pub fn add(&mut self, build: impl FnOnce(ThingId) -> Box<dyn Thing>) -> ThingId {
        let id = ThingId(self.next_id);
        self.next_id += 1;
        self.things.insert(id, build(id));
        id
    }

    pub fn get(&self, id: ThingId) -> Option<&dyn Thing> {
        self.things.get(&id).map(|thing| &**thing)
    }

    pub fn get_mut(&mut self, id: ThingId) -> Option<&mut dyn Thing> {
        Some(&mut **self.things.get_mut(&id)?)
    }

    /// Name lookup that treats a dangling id as the programming error it is.
    ///
    /// # Errors
    /// - if no thing with this id was ever registered
    pub fn name_of(&self, id: ThingId) -> Result<&str> {
        self.get(id)
            .map(|thing| thing.name())
            .ok_or_else(|| anyhow!("no thing with id {id:?} in registry"))
    }
}

/// Where a thing can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spot {
    Room(RoomId),
    Player,
}

/// Complete state of the running game, mutated turn by turn.
pub struct World {
    pub things: Registry,
    pub rooms: BTreeMap<RoomId, Room>,
    pub player: Player,
}

impl World {
    /// An empty world. The player starts pointed at the first room added;
    /// world assembly re-points it as needed.
    pub fn new() -> Self {
        Self {
            things: Registry::new(),
            rooms: BTreeMap::new(),
            player: Player::new(RoomId(0), 20),
        }
    }

    pub fn add_room(&mut self, description: &str) -> RoomId {
        let id = RoomId(u32::try_from(self.rooms.len()).unwrap_or(u32::MAX));
        self.rooms.insert(id, Room::new(id, description));
        id
    }

    /// Obtain a reference to a room.
    ///
    /// # Errors
    /// - if the id is unknown (world-wiring bug)
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(&id)
            .ok_or_else(|| anyhow!("room {id:?} not found in world"))
    }

    /// Obtain a reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's room id is unknown
    pub fn player_room(&self) -> Result<&Room> {
        self.room(self.player.room)
    }

    /// Wire a two-way door between rooms. Panics if either side already has
    /// a door in the relevant direction; the graph is authored before play
    /// and double-wiring is a bug, not a runtime condition.
    pub fn connect(&mut self, from: RoomId, to: RoomId, direction: Direction, description: &str) {
        let door = Door::new(description, from, to);
        self.rooms
            .get_mut(&from)
            .unwrap_or_else(|| panic!("connect: unknown room {from:?}"))
            .add_door(direction, door.clone());
        self.rooms
            .get_mut(&to)
            .unwrap_or_else(|| panic!("connect: unknown room {to:?}"))
            .add_door(direction.opposite(), door);
    }

    /// Create a thing and place it in the world.
    pub fn spawn(
        &mut self,
        at: Spot,
        place: &str,
        build: impl FnOnce(ThingId) -> Box<dyn Thing>,
    ) -> ThingId {
        let id = self.things.add(build);
        self.move_thing(id, at, place);
        id
    }

    /// Find which location currently holds a thing, if any does.
    pub fn location_of(&self, id: ThingId) -> Option<Spot> {
        if self.player.placed().iter().any(|p| p.id == id) {
            return Some(Spot::Player);
        }
        self.rooms
            .values()
            .find(|room| room.placed().iter().any(|p| p.id == id))
            .map(|room| Spot::Room(room.id))
    }

    /// Transfer a thing to a new location. The current placement is released
    /// first, so a thing is never held in two places.
    pub fn move_thing(&mut self, id: ThingId, to: Spot, place: &str) {
        if let Some(from) = self.location_of(id) {
            match from {
                Spot::Player => self.player.remove(id),
                Spot::Room(room_id) => {
                    if let Some(room) = self.rooms.get_mut(&room_id) {
                        room.remove(id);
                    }
                },
            }
        }
        match to {
            Spot::Player => self.player.place(id, place),
            Spot::Room(room_id) => match self.rooms.get_mut(&room_id) {
                Some(room) => room.place(id, place),
                None => warn!("move_thing: destination room {room_id:?} does not exist"),
            },
        }
        info!("thing {id:?} placed {place} at {to:?}");
    }

    /// Find a thing in the player's current room by name.
    pub fn find_in_room(&self, name: &str) -> Option<ThingId> {
        self.rooms.get(&self.player.room)?.find(name, &self.things)
    }

    /// Find a thing in the player's inventory by name.
    pub fn find_carried(&self, name: &str) -> Option<ThingId> {
        self.player.find(name, &self.things)
    }

    /// Find a thing the player can see: inventory first, then the room.
    pub fn find_nearby(&self, name: &str) -> Option<ThingId> {
        self.find_carried(name).or_else(|| self.find_in_room(name))
    }

    /// Ids of everything in the player's current room, in placement order.
    pub fn room_thing_ids(&self) -> Vec<ThingId> {
        self.rooms
            .get(&self.player.room)
            .map(|room| room.placed().iter().map(|p| p.id).collect())
            .unwrap_or_default()
    }

    /// The carried thing that is the player's one weapon, if there is
    /// exactly one carried thing that deals damage.
    pub fn only_weapon(&self) -> Option<ThingId> {
        let mut weapons = self
            .player
            .placed()
            .iter()
            .map(|p| p.id)
            .filter(|id| self.things.get(*id).is_some_and(|t| t.damage() > 0));
        let first = weapons.next()?;
        weapons.next().is_none().then_some(first)
    }

    /// Snapshot of every thing that might react to an action: the current
    /// room's contents followed by the player's inventory.
    pub fn reachable_things(&self) -> Vec<ThingId> {
        let mut ids = self.room_thing_ids();
        ids.extend(self.player.placed().iter().map(|p| p.id));
        ids
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::things::{Axe, Wall};

    fn two_room_world() -> (World, RoomId, RoomId) {
        let mut world = World::new();
        let hall = world.add_room("A hall.");
        let cellar = world.add_room("A cellar.");
        world.connect(hall, cellar, Direction::Down, "a trapdoor");
        world.player.room = hall;
        (world, hall, cellar)
    }

    #[test]
    fn connect_wires_both_sides() {
        let (world, hall, cellar) = two_room_world();
        let down = world.room(hall).unwrap().door_to(Direction::Down).unwrap();
        assert_eq!(down.from_room(hall), cellar);
        let up = world.room(cellar).unwrap().door_to(Direction::Up).unwrap();
        assert_eq!(up.from_room(cellar), hall);
    }

    #[test]
    #[should_panic(expected = "already has a door")]
    fn connect_panics_on_double_wiring() {
        let (mut world, hall, cellar) = two_room_world();
        world.connect(hall, cellar, Direction::Down, "a second trapdoor");
    }

    #[test]
    fn move_thing_keeps_placement_exclusive() {
        let (mut world, hall, cellar) = two_room_world();
        let axe = world.spawn(Spot::Room(hall), "on the floor", |id| Box::new(Axe::new(id)));
        assert_eq!(world.location_of(axe), Some(Spot::Room(hall)));

        world.move_thing(axe, Spot::Player, "in your bag");
        assert_eq!(world.location_of(axe), Some(Spot::Player));
        assert!(world.room(hall).unwrap().placed().is_empty());

        world.move_thing(axe, Spot::Room(cellar), "in a corner");
        assert_eq!(world.location_of(axe), Some(Spot::Room(cellar)));
        assert!(world.player.placed().is_empty());
    }

    #[test]
    fn find_helpers_respect_scope() {
        let (mut world, hall, cellar) = two_room_world();
        let axe = world.spawn(Spot::Room(cellar), "in a corner", |id| Box::new(Axe::new(id)));
        let wall = world.spawn(Spot::Room(hall), "to the north", |id| Box::new(Wall::new(id)));

        assert_eq!(world.find_in_room("wall"), Some(wall));
        assert_eq!(world.find_in_room("axe"), None);
        assert_eq!(world.find_carried("axe"), None);

        world.move_thing(axe, Spot::Player, "in your bag");
        assert_eq!(world.find_carried("axe"), Some(axe));
        assert_eq!(world.find_nearby("Wall"), Some(wall));
    }

    #[test]
    fn only_weapon_requires_exactly_one() {
        let (mut world, _hall, _cellar) = two_room_world();
        assert_eq!(world.only_weapon(), None);

        let axe = world.spawn(Spot::Player, "in your bag", |id| Box::new(Axe::new(id)));
        assert_eq!(world.only_weapon(), Some(axe));

        // a second weapon makes the choice ambiguous
        world.spawn(Spot::Player, "in your bag", |id| Box::new(Axe::new(id)));
        assert_eq!(world.only_weapon(), None);
    }

    #[test]
    fn reachable_things_cover_room_then_inventory() {
        let (mut world, hall, _cellar) = two_room_world();
        let wall = world.spawn(Spot::Room(hall), "to the north", |id| Box::new(Wall::new(id)));
        let axe = world.spawn(Spot::Player, "in your bag", |id| Box::new(Axe::new(id)));
        assert_eq!(world.reachable_things(), vec![wall, axe]);
    }
}
