//! The read-eval-print loop.
//!
//! One command is fully parsed, narrated, and propagated before the next is
//! accepted. Expected problems (bad verbs, missing things) are reported and
//! the session continues; only input failure or death ends it.

use anyhow::Result;
use log::{error, info};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::command::parse_command;
use crate::style::GameStyle;
use crate::text::wrap;
use crate::turn::{Outcome, run_turn};
use crate::world::World;

/// Run the loop until the player quits, dies, or input closes.
///
/// # Errors
/// - on terminal/readline failures
/// - on an engine failure while resolving a turn is logged, reported, and
///   survived; only input-layer errors propagate
pub fn run_repl(world: &mut World) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut turn_count: u32 = 0;

    loop {
        turn_count += 1;
        info!("================> BEGIN TURN {turn_count} <================");

        let prompt = format!("\n[{} hp]>> ", world.player.hit_points())
            .prompt_style()
            .to_string();
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => continue,
            Err(err) => return Err(err.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);

        if matches!(input, "quit" | "exit") {
            println!("{}", "You grope your way back to daylight.".narration_style());
            break;
        }

        match parse_command(world, input) {
            Err(command_error) => {
                println!("{}", command_error.to_string().error_style());
            },
            Ok(action) => match run_turn(world, action) {
                Ok(Outcome::Narrated(text)) => {
                    println!("{}", wrap(&text).narration_style());
                },
                Ok(Outcome::Raw(text)) => println!("{text}"),
                Err(err) => {
                    error!("turn failed: {err:#}");
                    println!("{}", "Something went wrong backstage.".error_style());
                },
            },
        }

        if !world.player.alive() {
            println!("{}", "You feel consciousness slipping away.".death_style());
            break;
        }
    }
    Ok(())
}
