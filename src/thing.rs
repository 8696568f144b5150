//! The capability contract every world object satisfies.
//!
//! A [`Thing`] is any object or creature in the world: it knows its name,
//! whether it can be carried, how hard it hits and how it takes a hit, and
//! how it reacts to each kind of [`Action`] happening nearby. Reactions are
//! opt-in per event: the defaults all produce no follow-up actions, so a
//! concrete thing overrides only the handlers it cares about.

use crate::action::{Action, Speaker};
use crate::world::World;

/// Identity of a thing for the life of the session. Placement changes;
/// identity does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThingId(pub u32);

/// A weapon's swing: the damage it deals plus the flavor text of the attempt.
#[derive(Debug, Clone)]
pub struct Strike {
    pub damage: u32,
    pub text: String,
}

/// Contract for any object or creature in the world.
///
/// `describe`, `is_portable`, and `eat` have no sensible defaults and must
/// be supplied by every concrete thing. Reaction handlers are read-only over
/// the world: they decide, they do not mutate. Mutation happens when the
/// returned follow-up actions are themselves narrated.
pub trait Thing {
    fn id(&self) -> ThingId;

    fn name(&self) -> &str;

    /// Article-free noun phrase, e.g. "axe with a notch in the blade".
    fn describe(&self) -> String;

    fn is_portable(&self) -> bool;

    /// Damage dealt when used as a weapon. Zero for anything that isn't one.
    fn damage(&self) -> u32 {
        0
    }

    fn can_be_taken(&self) -> bool {
        self.is_portable()
    }

    /// Creatures override this; plain objects are never alive.
    fn alive(&self) -> bool {
        false
    }

    /// What happens when the player eats (or tries to eat) this.
    /// The thing itself decides whether it is actually edible.
    fn eat(&mut self) -> String;

    /// Resolve this thing's intrinsic attack when wielded.
    fn strike(&self) -> Strike {
        Strike {
            damage: self.damage(),
            text: format!("You attack with the {}.", self.name()),
        }
    }

    /// Apply an incoming hit and narrate the result.
    fn take_hit(&mut self, _damage: u32) -> String {
        format!("The {} is entirely unbothered.", self.name())
    }

    // Event handlers, one per action tag. Silence is the default.

    fn on_attack(&self, _damage: u32, _world: &World) -> Vec<Action> {
        Vec::new()
    }

    fn on_drop(&self, _dropped: ThingId, _world: &World) -> Vec<Action> {
        Vec::new()
    }

    fn on_eat(&self, _eaten: ThingId, _world: &World) -> Vec<Action> {
        Vec::new()
    }

    fn on_enter(&self, _world: &World) -> Vec<Action> {
        Vec::new()
    }

    fn on_look(&self, _world: &World) -> Vec<Action> {
        Vec::new()
    }

    fn on_move(&self, _moved: ThingId, _world: &World) -> Vec<Action> {
        Vec::new()
    }

    fn on_player_attack(&self, _target: ThingId, _weapon: ThingId, _world: &World) -> Vec<Action> {
        Vec::new()
    }

    fn on_say(&self, _speaker: &Speaker, _text: &str, _world: &World) -> Vec<Action> {
        Vec::new()
    }

    fn on_take(&self, _taken: &[ThingId], _world: &World) -> Vec<Action> {
        Vec::new()
    }

    fn on_turn(&self, _world: &World) -> Vec<Action> {
        Vec::new()
    }
}
