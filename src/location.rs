//! The capability contract for anything that holds things.
//!
//! Both the player's inventory and a room satisfy [`Location`]: things are
//! placed "at" a free-text sub-place, removed, found by case-insensitive
//! name, and enumerated. The shared implementation lives in [`Contents`];
//! `Room` and `Player` delegate to it.

use crate::thing::ThingId;
use crate::world::Registry;

/// A thing plus the label of where it sits ("in your bag", "on the floor").
/// The label is narration only, never logic.
#[derive(Debug, Clone)]
pub struct PlacedThing {
    pub id: ThingId,
    pub place: String,
}

/// Ordered collection of placements. Order is insertion order, which is the
/// order things are listed in descriptions and visited during propagation.
#[derive(Debug, Default)]
pub struct Contents {
    placed: Vec<PlacedThing>,
}

impl Contents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a thing at the labeled sub-place. Re-placing a thing already
    /// held just updates its label, so a thing is never held twice.
    pub fn place(&mut self, id: ThingId, place: &str) {
        if let Some(existing) = self.placed.iter_mut().find(|p| p.id == id) {
            existing.place = place.to_string();
        } else {
            self.placed.push(PlacedThing {
                id,
                place: place.to_string(),
            });
        }
    }

    pub fn remove(&mut self, id: ThingId) {
        self.placed.retain(|p| p.id != id);
    }

    pub fn contains(&self, id: ThingId) -> bool {
        self.placed.iter().any(|p| p.id == id)
    }

    pub fn find(&self, name: &str, things: &Registry) -> Option<ThingId> {
        self.placed
            .iter()
            .map(|p| p.id)
            .find(|id| things.get(*id).is_some_and(|t| t.name().eq_ignore_ascii_case(name)))
    }

    pub fn placed(&self) -> &[PlacedThing] {
        &self.placed
    }

    pub fn ids(&self) -> impl Iterator<Item = ThingId> + '_ {
        self.placed.iter().map(|p| p.id)
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

/// Any container of things addressable by name (room or inventory).
pub trait Location {
    fn place(&mut self, thing: ThingId, place: &str);
    fn remove(&mut self, thing: ThingId);
    fn find(&self, name: &str, things: &Registry) -> Option<ThingId>;
    fn placed(&self) -> &[PlacedThing];
}
