//! Verb grammar: turning a line of input into a validated [`Action`].
//!
//! Token 0 is the verb; the rest are verb-specific arguments pulled through
//! the [`crate::parse`] combinators. Messages are attached immediately
//! after the stage that can fail, so the most specific failure wins.

use crate::action::{Action, Speaker};
use crate::parse::{CommandError, arg, args, implicit};
use crate::room::Direction;
use crate::world::World;

/// Parse one line of input against the current world.
///
/// # Errors
/// - a [`CommandError`] carrying the user-facing message for any expected
///   problem: unknown verb, missing argument, name that matches nothing
pub fn parse_command(world: &World, input: &str) -> Result<Action, CommandError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some(&verb) = tokens.first() else {
        return Err(CommandError::new("Say something."));
    };
    match verb.to_lowercase().as_str() {
        "attack" | "hit" | "fight" => parse_attack(world, &tokens),
        "drop" => parse_drop(world, &tokens),
        "eat" => parse_eat(world, &tokens),
        "go" | "walk" | "climb" => parse_go(world, &tokens),
        "look" | "l" => Ok(Action::Look),
        "say" | "shout" => parse_say(&tokens),
        "take" | "get" | "grab" => parse_take(world, &tokens),
        "inventory" | "inv" | "i" => {
            Ok(Action::Silent(world.player.inventory_line(&world.things)))
        },
        "help" | "?" => Ok(Action::Raw(help_text())),
        _ => Err(CommandError::new(format!("Don't know how to {verb}."))),
    }
}

fn parse_go(world: &World, tokens: &[&str]) -> Result<Action, CommandError> {
    arg(tokens, 1)
        .or("Go where?")
        .maybe(|token| Direction::from_token(token))
        .or_with(|token| format!("Don't know how to go '{token}'."))
        .to_action(|direction| {
            world
                .player_room()
                .ok()
                .and_then(|room| room.door_to(direction))
                .map(|door| Action::Go { door: door.clone() })
                .ok_or_else(|| CommandError::new(format!("No door to the {direction}")))
        })
}

fn parse_take(world: &World, tokens: &[&str]) -> Result<Action, CommandError> {
    args(tokens, 1, tokens.len())
        .or("Take what?")
        .maybe(|name| {
            if name.eq_ignore_ascii_case("all") {
                let everything = world.room_thing_ids();
                if everything.is_empty() { None } else { Some(everything) }
            } else {
                world.find_in_room(name).map(|id| vec![id])
            }
        })
        .or_with(|name| {
            if name.eq_ignore_ascii_case("all") {
                "Nothing here to take.".to_string()
            } else {
                format!("There is no {name} here to take.")
            }
        })
        .to_action(|things| Ok(Action::Take { things }))
}

fn parse_drop(world: &World, tokens: &[&str]) -> Result<Action, CommandError> {
    arg(tokens, 1)
        .or("Drop what?")
        .maybe(|name| world.find_carried(name))
        .or_with(|name| format!("You aren't carrying any {name}."))
        .to_action(|thing| Ok(Action::Drop { thing }))
}

fn parse_eat(world: &World, tokens: &[&str]) -> Result<Action, CommandError> {
    arg(tokens, 1)
        .or("Eat what?")
        .maybe(|name| world.find_nearby(name))
        .or_with(|name| format!("There is no {name} here to eat."))
        .to_action(|thing| Ok(Action::Eat { thing }))
}

fn parse_say(tokens: &[&str]) -> Result<Action, CommandError> {
    args(tokens, 1, tokens.len())
        .or("Say what?")
        .to_action(|text| {
            Ok(Action::Say {
                speaker: Speaker::Player,
                text,
            })
        })
}

/// `attack <target>` wields the player's one weapon, if they carry exactly
/// one; `attack <target> with <weapon>` names it explicitly.
fn parse_attack(world: &World, tokens: &[&str]) -> Result<Action, CommandError> {
    arg(tokens, 1)
        .or("Attack what?")
        .maybe(|name| world.find_in_room(name))
        .or_with(|name| format!("There is no {name} here to attack."))
        .to_action(|target| {
            if tokens.len() > 2 {
                arg(tokens, 2)
                    .expect(&"with")
                    .or("Try: attack <target> with <weapon>.")
                    .maybe(|_| tokens.get(3).copied())
                    .or("Attack with what?")
                    .maybe(|name| world.find_carried(name))
                    .or_with(|name| format!("You aren't carrying any {name}."))
                    .to_action(|weapon| Ok(Action::PlayerAttack { target, weapon }))
            } else {
                implicit(|| world.only_weapon())
                    .or("You have nothing to attack with.")
                    .to_action(|weapon| Ok(Action::PlayerAttack { target, weapon }))
            }
        })
}

fn help_text() -> String {
    [
        "Commands:",
        "  look                          look around the current room",
        "  go <direction>                move through a door (n/s/e/w/up/down)",
        "  take <thing> | take all       pick things up",
        "  drop <thing>                  put a carried thing down",
        "  eat <thing>                   if you must",
        "  attack <thing> [with <item>]  violence, with an optional tool",
        "  say <words>                   speak your mind",
        "  inventory                     list what you carry",
        "  quit                          leave the dungeon",
    ]
    .join("\n")
}
