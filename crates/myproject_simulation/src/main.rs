//! Headless демо MyProject
//!
//! Запускает персонажа выбранного варианта со scripted input.
//!
//! Usage: `myproject_simulation [variant] [ticks] [seed]`

use bevy::prelude::*;
use myproject_simulation::demo::create_demo_app;
use myproject_simulation::{log_info, CharacterMotion, CharacterVariant, FollowCamera, DEFAULT_SEED};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);

    let variant: CharacterVariant = match args.next() {
        Some(arg) => arg.parse()?,
        None => CharacterVariant::ThirdPerson,
    };
    let ticks: u32 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 600,
    };
    let seed: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_SEED,
    };

    let (mut app, character) = create_demo_app(variant, seed)?;
    log_info(&format!(
        "Starting headless {} simulation (seed: {}, ticks: {})",
        variant, seed, ticks
    ));

    for tick in 0..ticks {
        app.update();

        if tick % 60 == 0 {
            let world = app.world();
            let (Some(transform), Some(motion), Some(camera)) = (
                world.get::<Transform>(character),
                world.get::<CharacterMotion>(character),
                world.get::<FollowCamera>(character),
            ) else {
                anyhow::bail!("character {:?} lost its movement components", character);
            };

            log_info(&format!(
                "Tick {}: pos {:.1?} speed {:.1} yaw {:.1} grounded {} camera {:.1?}",
                tick,
                transform.translation,
                motion.horizontal_speed(),
                motion.facing_yaw,
                motion.grounded,
                camera.location
            ));
        }
    }

    log_info("Simulation complete!");
    Ok(())
}
