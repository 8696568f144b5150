//! The player: an inventory-carrying, damageable occupant of one room.

use log::info;

use crate::location::{Contents, Location, PlacedThing};
use crate::room::RoomId;
use crate::text::{a, commify};
use crate::thing::ThingId;
use crate::world::Registry;

#[derive(Debug)]
pub struct Player {
    pub room: RoomId,
    hit_points: u32,
    inventory: Contents,
}

impl Player {
    pub fn new(room: RoomId, hit_points: u32) -> Self {
        Self {
            room,
            hit_points,
            inventory: Contents::new(),
        }
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    pub fn alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Apply incoming damage and report the toll. Saturates at zero.
    pub fn take_damage(&mut self, amount: u32) -> String {
        self.hit_points = self.hit_points.saturating_sub(amount);
        info!("player takes {amount} damage, {} hp left", self.hit_points);
        let s = if amount == 1 { "" } else { "s" };
        let status = if self.alive() {
            format!("You're down to {}.", self.hit_points)
        } else {
            "You feel consciousness slipping away.".to_string()
        };
        format!("You take {amount} hit point{s} of damage. {status}")
    }

    /// One-line inventory listing for the `inventory` command.
    pub fn inventory_line(&self, things: &Registry) -> String {
        let described: Vec<String> = self
            .inventory
            .placed()
            .iter()
            .filter_map(|p| things.get(p.id).map(|t| a(&t.describe())))
            .collect();
        if described.is_empty() {
            "You aren't carrying anything.".to_string()
        } else {
            format!("You have {}.", commify(&described))
        }
    }
}

impl Location for Player {
    fn place(&mut self, thing: ThingId, place: &str) {
        self.inventory.place(thing, place);
    }

    fn remove(&mut self, thing: ThingId) {
        self.inventory.remove(thing);
    }

    fn find(&self, name: &str, things: &Registry) -> Option<ThingId> {
        self.inventory.find(name, things)
    }

    fn placed(&self) -> &[PlacedThing] {
        self.inventory.placed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::things::Axe;

    #[test]
    fn damage_saturates_at_zero() {
        let mut player = Player::new(RoomId(0), 3);
        player.take_damage(2);
        assert!(player.alive());
        player.take_damage(10);
        assert_eq!(player.hit_points(), 0);
        assert!(!player.alive());
    }

    #[test]
    fn damage_report_tracks_count_and_consciousness() {
        let mut player = Player::new(RoomId(0), 5);
        assert_eq!(
            player.take_damage(1),
            "You take 1 hit point of damage. You're down to 4."
        );
        assert_eq!(
            player.take_damage(2),
            "You take 2 hit points of damage. You're down to 2."
        );
        assert_eq!(
            player.take_damage(9),
            "You take 9 hit points of damage. You feel consciousness slipping away."
        );
    }

    #[test]
    fn inventory_line_lists_carried_things() {
        let mut things = Registry::new();
        let axe = things.add(|id| Box::new(Axe::new(id)));
        let mut player = Player::new(RoomId(0), 10);
        assert_eq!(player.inventory_line(&things), "You aren't carrying anything.");
        player.place(axe, "in your bag");
        assert_eq!(
            player.inventory_line(&things),
            "You have an axe with a notch in the blade."
        );
    }
}
