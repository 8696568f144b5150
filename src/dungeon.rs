//! Assembly of the demo dungeon the binary runs.

use log::info;

use crate::room::Direction;
use crate::things::{Axe, Blobbyblob, Parrot, Wall};
use crate::world::{Spot, World};

/// Build the small demo world: three rooms, one weapon, one monster, one
/// irritating bird.
pub fn build_demo_world() -> World {
    let mut world = World::new();

    let hall = world.add_room(
        "You are in a dank entry hall. Moss slicks the flagstones and \
         somewhere below, something wet is breathing.",
    );
    let gallery = world.add_room(
        "You are in a long gallery. Faded portraits watch you pass with \
         flaking, disapproving eyes.",
    );
    let crypt = world.add_room(
        "You are in a low crypt. The air tastes of dust and old iron.",
    );

    world.connect(hall, gallery, Direction::North, "a splintered oak door");
    world.connect(gallery, crypt, Direction::Down, "a narrow stone stair");
    world.player.room = hall;

    world.spawn(Spot::Room(hall), "on the floor", |id| Box::new(Axe::new(id)));
    world.spawn(Spot::Room(hall), "along the east side", |id| Box::new(Wall::new(id)));
    world.spawn(Spot::Room(gallery), "across from you", |id| {
        Box::new(Blobbyblob::new(id, 6))
    });
    world.spawn(Spot::Room(crypt), "perched on a cracked sarcophagus", |id| {
        Box::new(Parrot::new(id))
    });

    info!("demo world assembled: {} rooms", world.rooms.len());
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_world_is_wired_and_stocked() {
        let world = build_demo_world();
        assert_eq!(world.rooms.len(), 3);
        assert!(world.find_in_room("axe").is_some());
        assert!(world.find_in_room("wall").is_some());
        assert!(world.find_in_room("parrot").is_none());
        assert!(world.player_room().is_ok());
    }
}
