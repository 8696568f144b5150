//! Turn resolution: narrate the primary action, then propagate it to every
//! reachable thing, breadth-first, until no new actions are produced.
//!
//! One command is fully resolved before the next is accepted; there is
//! exactly one logical actor at a time, so world mutation is plain direct
//! mutation with no locking.

use std::collections::VecDeque;

use anyhow::Result;
use log::{debug, warn};

use crate::action::{Action, Narration};
use crate::world::World;

/// Runaway reaction chains are author bugs; cap the fixed point and move on.
const MAX_ACTIONS_PER_TURN: usize = 64;

/// The user-visible result of one fully resolved command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Narration strings joined in generation order; the REPL wraps these.
    Narrated(String),
    /// Raw output that becomes the entire response, unwrapped.
    Raw(String),
}

/// Resolve one player command: the primary action followed by the turn tick,
/// each narrated once and propagated to everything reachable. Follow-up
/// actions join the back of the queue, so resolution is breadth-first and
/// ends at a fixed point.
///
/// # Errors
/// - propagates narration failures (dangling ids from reactions or wiring)
pub fn run_turn(world: &mut World, primary: Action) -> Result<Outcome> {
    let mut queue = VecDeque::from([primary, Action::Turn]);
    let mut parts: Vec<String> = Vec::new();
    let mut resolved = 0usize;

    while let Some(action) = queue.pop_front() {
        resolved += 1;
        if resolved > MAX_ACTIONS_PER_TURN {
            warn!("turn exceeded {MAX_ACTIONS_PER_TURN} actions; dropping the rest");
            break;
        }
        debug!("resolving {action:?}");

        match action.narrate(world)? {
            Narration::Raw(text) => return Ok(Outcome::Raw(text)),
            Narration::Text(text) => {
                if !text.is_empty() {
                    parts.push(text);
                }
            },
        }

        // snapshot: narration may have changed what is reachable
        for subject in world.reachable_things() {
            queue.extend(action.propagate(world, subject));
        }
    }

    Ok(Outcome::Narrated(parts.join(" ")))
}
