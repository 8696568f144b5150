//! Concrete things for the demo dungeon.
//!
//! Each one satisfies [`Thing`] and overrides only what it cares about: the
//! axe its strike and eat text, the Blobbyblob its whole combat-and-cuisine
//! lifecycle, the parrot a single reaction handler.

use log::info;

use crate::action::{Action, Speaker};
use crate::thing::{Strike, Thing, ThingId};
use crate::world::{Spot, World};

/// A serviceable hand axe. The one weapon the demo world offers.
pub struct Axe {
    id: ThingId,
}

impl Axe {
    pub fn new(id: ThingId) -> Self {
        Self { id }
    }
}

impl Thing for Axe {
    fn id(&self) -> ThingId {
        self.id
    }

    fn name(&self) -> &str {
        "axe"
    }

    fn describe(&self) -> String {
        "axe with a notch in the blade".to_string()
    }

    fn is_portable(&self) -> bool {
        true
    }

    fn damage(&self) -> u32 {
        2
    }

    fn eat(&mut self) -> String {
        "Axes are not good for eating. Now your teeth hurt and you are no less hungry.".to_string()
    }

    fn strike(&self) -> Strike {
        Strike {
            damage: self.damage(),
            text: "You swing your axe and connect!".to_string(),
        }
    }
}

/// Scenery. Exists mostly to be refused politely.
pub struct Wall {
    id: ThingId,
}

impl Wall {
    pub fn new(id: ThingId) -> Self {
        Self { id }
    }
}

impl Thing for Wall {
    fn id(&self) -> ThingId {
        self.id
    }

    fn name(&self) -> &str {
        "wall"
    }

    fn describe(&self) -> String {
        "rough stone wall".to_string()
    }

    fn is_portable(&self) -> bool {
        false
    }

    fn eat(&mut self) -> String {
        "You gnaw at the wall. It is not food and never will be.".to_string()
    }
}

/// A gelatinous monster. Attacks the player on its turn while alive;
/// becomes edible, if regrettable, once dead.
pub struct Blobbyblob {
    id: ThingId,
    hit_points: u32,
}

impl Blobbyblob {
    pub fn new(id: ThingId, hit_points: u32) -> Self {
        Self { id, hit_points }
    }
}

impl Thing for Blobbyblob {
    fn id(&self) -> ThingId {
        self.id
    }

    fn name(&self) -> &str {
        "Blobbyblob"
    }

    fn describe(&self) -> String {
        if self.alive() {
            "Blobbyblob, a gelatinous mass with too many eyes and an odor of jello casserole gone bad"
                .to_string()
        } else {
            "dead Blobbyblob decaying into a puddle of goo".to_string()
        }
    }

    fn is_portable(&self) -> bool {
        false
    }

    fn damage(&self) -> u32 {
        2
    }

    fn alive(&self) -> bool {
        self.hit_points > 0
    }

    fn eat(&mut self) -> String {
        if self.alive() {
            "Are you out of your mind?! This is a live and jiggling Blobbyblob!".to_string()
        } else {
            "Ugh. This is worse than the worst jello casserole you have ever tasted. \
             But it slightly sates your hunger."
                .to_string()
        }
    }

    fn take_hit(&mut self, damage: u32) -> String {
        self.hit_points = self.hit_points.saturating_sub(damage);
        info!("Blobbyblob takes {damage}, {} hp left", self.hit_points);
        if self.alive() {
            "The Blobbyblob is wounded but still alive. And now it's mad.".to_string()
        } else {
            "The Blobbyblob is dead. Murderer.".to_string()
        }
    }

    fn on_player_attack(&self, target: ThingId, _weapon: ThingId, world: &World) -> Vec<Action> {
        // a hit that doesn't kill it just makes it close the distance
        if target != self.id || !self.alive() {
            return Vec::new();
        }
        vec![Action::Move {
            thing: self.id,
            to: Spot::Room(world.player.room),
            place: "right in your face".to_string(),
            text: "The Blobbyblob surges forward, quivering with rage.".to_string(),
        }]
    }

    fn on_turn(&self, world: &World) -> Vec<Action> {
        let in_players_room =
            world.location_of(self.id) == Some(Spot::Room(world.player.room));
        if self.alive() && in_players_room {
            vec![Action::Attack {
                damage: self.damage(),
                text: "The Blobbyblob extrudes a blobby arm and smashes at you!".to_string(),
            }]
        } else {
            Vec::new()
        }
    }
}

/// Repeats whatever it hears, with commentary. Ignores its own voice, which
/// is what keeps the echo from going on forever.
pub struct Parrot {
    id: ThingId,
}

impl Parrot {
    pub fn new(id: ThingId) -> Self {
        Self { id }
    }
}

impl Thing for Parrot {
    fn id(&self) -> ThingId {
        self.id
    }

    fn name(&self) -> &str {
        "parrot"
    }

    fn describe(&self) -> String {
        "green parrot with a sardonic stare".to_string()
    }

    fn is_portable(&self) -> bool {
        false
    }

    fn eat(&mut self) -> String {
        "The parrot easily evades your lunge. You feel foolish.".to_string()
    }

    fn on_say(&self, speaker: &Speaker, text: &str, _world: &World) -> Vec<Action> {
        if *speaker == Speaker::Thing(self.id) {
            return Vec::new();
        }
        vec![Action::Say {
            speaker: Speaker::Thing(self.id),
            text: format!("{text}! Rawk!"),
        }]
    }
}
