//! The closed set of world-mutating operations.
//!
//! Each [`Action`] variant owns exactly the entity references it needs to
//! (a) perform its mutation and produce narration, and (b) decide which
//! reaction handler to invoke on a candidate world object. An action
//! instance lives for one narrate-plus-propagate cycle within one turn and
//! is never reused: narrating twice would double-apply the mutation.
//!
//! `Silent` and `Raw` are pseudo-actions: single responses that generate no
//! events. `Raw` additionally signals the command loop to skip the standard
//! output wrapping, surfacing as [`Narration::Raw`].

use anyhow::{Result, anyhow};
use log::info;
use variantly::Variantly;

use crate::room::Door;
use crate::text::{a, commify};
use crate::thing::ThingId;
use crate::world::{Spot, World};

/// Who is speaking in a [`Action::Say`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Player,
    Thing(ThingId),
}

/// One executable game verb.
#[derive(Debug, Clone, Variantly)]
pub enum Action {
    /// Something attacks the player.
    Attack { damage: u32, text: String },
    /// The player drops a carried thing into the current room.
    Drop { thing: ThingId },
    /// The player eats (or tries to eat) a thing; the thing decides.
    Eat { thing: ThingId },
    /// The player moves through a door.
    Go { door: Door },
    /// The player looks around the current room.
    Look,
    /// A thing is relocated to a named place, with supplied movement text.
    Move {
        thing: ThingId,
        to: Spot,
        place: String,
        text: String,
    },
    /// The player attacks a target with a weapon.
    PlayerAttack { target: ThingId, weapon: ThingId },
    /// Quoted speech attributed to a speaker.
    Say { speaker: Speaker, text: String },
    /// The player takes every takable candidate into inventory.
    Take { things: Vec<ThingId> },
    /// End-of-command tick broadcast so creatures get to act. No narration.
    Turn,
    /// Pseudo-action: narration only, no event propagation.
    Silent(String),
    /// Pseudo-action: preformatted output that bypasses wrapping and aborts
    /// further propagation for this command.
    Raw(String),
}

/// What narrating one action produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Narration {
    Text(String),
    Raw(String),
}

impl Action {
    /// Perform this action's world mutation and describe what happened.
    /// Must be invoked exactly once per action instance.
    ///
    /// # Errors
    /// - on a dangling thing or room id, which means a reaction handler or
    ///   world assembly produced a reference to something unregistered
    pub fn narrate(&self, world: &mut World) -> Result<Narration> {
        let text = match self {
            Action::Attack { damage, text } => {
                let toll = world.player.take_damage(*damage);
                format!("{text} {toll}")
            },
            Action::Drop { thing } => {
                let name = world.things.name_of(*thing)?.to_string();
                let here = world.player.room;
                world.move_thing(*thing, Spot::Room(here), "on the floor");
                format!("You drop the {name}.")
            },
            Action::Eat { thing } => world
                .things
                .get_mut(*thing)
                .ok_or_else(|| anyhow!("eat: no thing with id {thing:?}"))?
                .eat(),
            Action::Go { door } => {
                let destination = door.from_room(world.player.room);
                world.player.room = destination;
                info!("player went through {} to {destination:?}", door.description);
                world.room(destination)?.describe(&world.things)
            },
            Action::Look => world.player_room()?.describe(&world.things),
            Action::Move {
                thing,
                to,
                place,
                text,
            } => {
                world.move_thing(*thing, *to, place);
                text.clone()
            },
            Action::PlayerAttack { target, weapon } => {
                let strike = world
                    .things
                    .get(*weapon)
                    .ok_or_else(|| anyhow!("attack: no weapon with id {weapon:?}"))?
                    .strike();
                let result = world
                    .things
                    .get_mut(*target)
                    .ok_or_else(|| anyhow!("attack: no target with id {target:?}"))?
                    .take_hit(strike.damage);
                format!("{} {result}", strike.text)
            },
            Action::Say { speaker, text } => match speaker {
                Speaker::Player => format!("'{text}' you say."),
                Speaker::Thing(id) => {
                    format!("'{text}' says the {}.", world.things.name_of(*id)?)
                },
            },
            Action::Take { things } => {
                let mut taken = Vec::new();
                let mut not_taken = Vec::new();
                for id in things {
                    let Some(thing) = world.things.get(*id) else {
                        continue;
                    };
                    if thing.can_be_taken() {
                        let described = a(&thing.describe());
                        world.move_thing(*id, Spot::Player, "in your bag");
                        taken.push(described);
                    } else {
                        not_taken.push(thing.name().to_string());
                    }
                }
                let mut clauses = Vec::new();
                if !taken.is_empty() {
                    clauses.push(format!("Okay, took {}.", commify(&taken)));
                }
                if !not_taken.is_empty() {
                    clauses.push(format!("Can't take {}.", commify(&not_taken)));
                }
                clauses.join(" ")
            },
            Action::Turn => String::new(),
            Action::Silent(text) => text.clone(),
            Action::Raw(text) => return Ok(Narration::Raw(text.clone())),
        };
        Ok(Narration::Text(text))
    }

    /// Ask one world object whether and how it reacts to this action.
    /// Unknown subjects and pseudo-actions react to nothing.
    pub fn propagate(&self, world: &World, subject: ThingId) -> Vec<Action> {
        let Some(thing) = world.things.get(subject) else {
            return Vec::new();
        };
        match self {
            Action::Attack { damage, .. } => thing.on_attack(*damage, world),
            Action::Drop { thing: dropped } => thing.on_drop(*dropped, world),
            Action::Eat { thing: eaten } => thing.on_eat(*eaten, world),
            Action::Go { .. } => thing.on_enter(world),
            Action::Look => thing.on_look(world),
            Action::Move { thing: moved, .. } => thing.on_move(*moved, world),
            Action::PlayerAttack { target, weapon } => {
                thing.on_player_attack(*target, *weapon, world)
            },
            Action::Say { speaker, text } => thing.on_say(speaker, text, world),
            Action::Take { things } => thing.on_take(things, world),
            Action::Turn => thing.on_turn(world),
            Action::Silent(_) | Action::Raw(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Direction;
    use crate::things::{Axe, Wall};

    fn small_world() -> World {
        let mut world = World::new();
        let hall = world.add_room("A hall.");
        let cellar = world.add_room("A cellar.");
        world.connect(hall, cellar, Direction::Down, "a trapdoor");
        world.player.room = hall;
        world
    }

    #[test]
    fn take_partitions_takable_from_untakable() {
        let mut world = small_world();
        let hall = world.player.room;
        let axe = world.spawn(Spot::Room(hall), "on the floor", |id| Box::new(Axe::new(id)));
        let wall = world.spawn(Spot::Room(hall), "to the north", |id| Box::new(Wall::new(id)));

        let narration = Action::Take { things: vec![axe, wall] }
            .narrate(&mut world)
            .unwrap();
        assert_eq!(
            narration,
            Narration::Text(
                "Okay, took an axe with a notch in the blade. Can't take wall.".to_string()
            )
        );
        assert_eq!(world.location_of(axe), Some(Spot::Player));
        assert_eq!(world.location_of(wall), Some(Spot::Room(hall)));
    }

    #[test]
    fn take_omits_empty_clauses() {
        let mut world = small_world();
        let hall = world.player.room;
        let wall = world.spawn(Spot::Room(hall), "to the north", |id| Box::new(Wall::new(id)));
        let narration = Action::Take { things: vec![wall] }.narrate(&mut world).unwrap();
        assert_eq!(narration, Narration::Text("Can't take wall.".to_string()));
    }

    #[test]
    fn go_moves_player_and_describes_destination() {
        let mut world = small_world();
        let hall = world.player.room;
        let door = world
            .room(hall)
            .unwrap()
            .door_to(Direction::Down)
            .unwrap()
            .clone();
        let narration = Action::Go { door }.narrate(&mut world).unwrap();
        assert_ne!(world.player.room, hall);
        assert_eq!(narration, Narration::Text("A cellar.".to_string()));
    }

    #[test]
    fn drop_places_thing_in_current_room() {
        let mut world = small_world();
        let axe = world.spawn(Spot::Player, "in your bag", |id| Box::new(Axe::new(id)));
        let narration = Action::Drop { thing: axe }.narrate(&mut world).unwrap();
        assert_eq!(narration, Narration::Text("You drop the axe.".to_string()));
        assert_eq!(world.location_of(axe), Some(Spot::Room(world.player.room)));
    }

    #[test]
    fn move_relocates_the_thing_and_returns_the_movement_text() {
        let mut world = small_world();
        let hall = world.player.room;
        let cellar = world
            .room(hall)
            .unwrap()
            .door_to(Direction::Down)
            .unwrap()
            .from_room(hall);
        let axe = world.spawn(Spot::Room(hall), "on the floor", |id| Box::new(Axe::new(id)));

        let narration = Action::Move {
            thing: axe,
            to: Spot::Room(cellar),
            place: "at the foot of the ladder".to_string(),
            text: "The axe clatters down through the trapdoor.".to_string(),
        }
        .narrate(&mut world)
        .unwrap();
        assert_eq!(
            narration,
            Narration::Text("The axe clatters down through the trapdoor.".to_string())
        );
        assert_eq!(world.location_of(axe), Some(Spot::Room(cellar)));
    }

    #[test]
    fn attack_damages_the_player_and_narrates_the_toll() {
        let mut world = small_world();
        let before = world.player.hit_points();
        let narration = Action::Attack {
            damage: 2,
            text: "A blow lands!".to_string(),
        }
        .narrate(&mut world)
        .unwrap();
        assert_eq!(
            narration,
            Narration::Text(format!(
                "A blow lands! You take 2 hit points of damage. You're down to {}.",
                before - 2
            ))
        );
        assert_eq!(world.player.hit_points(), before - 2);
    }

    #[test]
    fn raw_narration_carries_the_bypass_signal() {
        let mut world = small_world();
        let narration = Action::Raw("  preformatted  ".to_string())
            .narrate(&mut world)
            .unwrap();
        assert_eq!(narration, Narration::Raw("  preformatted  ".to_string()));
    }

    #[test]
    fn pseudo_actions_never_propagate() {
        let mut world = small_world();
        let hall = world.player.room;
        let wall = world.spawn(Spot::Room(hall), "to the north", |id| Box::new(Wall::new(id)));
        assert!(Action::Silent("quiet".into()).propagate(&world, wall).is_empty());
        assert!(Action::Raw("raw".into()).propagate(&world, wall).is_empty());
    }

    #[test]
    fn turn_narrates_nothing() {
        let mut world = small_world();
        assert_eq!(Action::Turn.narrate(&mut world).unwrap(), Narration::Text(String::new()));
        assert!(Action::Turn.is_turn());
    }
}
