#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Underkeep **
//! A small dungeon to get lost in.

use anyhow::Result;
use log::info;

use underkeep::style::GameStyle;
use underkeep::text::wrap;
use underkeep::{build_demo_world, run_repl};

fn main() -> Result<()> {
    env_logger::init();
    info!("assembling the underkeep...");
    let mut world = build_demo_world();

    println!("{:^80}", "U N D E R K E E P".title_style());
    println!(
        "{:^80}\n",
        "an adventure in questionable decisions".narration_style()
    );
    let opening = world.player_room()?.describe(&world.things);
    println!("{}", wrap(&opening).narration_style());

    run_repl(&mut world)
}
