//! Scripted input для headless демо
//!
//! Генерирует input события из DeterministicRng: одинаковый seed →
//! одинаковый поток событий → одинаковая траектория.

use bevy::prelude::*;
use rand::Rng;

use crate::components::Controller;
use crate::config::CharacterVariant;
use crate::input::{
    dispatch_action_input, dispatch_axis_input, InputActionEvent, InputAxisEvent, JUMP, MOVE_FORWARD,
    MOVE_RIGHT, TEST_LOG,
};
use crate::physics::{spawn_character, SIMULATION_HZ};
use crate::{create_headless_app, DeterministicRng, SimulationPlugin};

/// Скриптованный "игрок": держит оси и скорость поворота камеры
/// в течение сегмента, потом выбирает новые значения
#[derive(Component, Debug, Clone, Default)]
pub struct ScriptedInput {
    pub forward: f32,
    pub right: f32,
    /// Поворот камеры (deg/s)
    pub yaw_rate: f32,
    pub frames_left: u32,
    pub jump_held: bool,
}

/// Каждый frame: новый сегмент при необходимости + axis события
pub fn drive_scripted_input(
    mut rng: ResMut<DeterministicRng>,
    mut drivers: Query<(Entity, &mut ScriptedInput, Option<&mut Controller>)>,
    mut axis_events: EventWriter<InputAxisEvent>,
    mut action_events: EventWriter<InputActionEvent>,
) {
    for (entity, mut script, controller) in drivers.iter_mut() {
        if script.frames_left == 0 {
            if script.jump_held {
                action_events.write(InputActionEvent::released(entity, JUMP));
                script.jump_held = false;
            }

            let rng = &mut rng.rng;
            script.forward = [-1.0, 0.0, 1.0, 1.0][rng.gen_range(0..4)];
            script.right = [-1.0, 0.0, 0.0, 1.0][rng.gen_range(0..4)];
            script.yaw_rate = rng.gen_range(-90.0..=90.0);
            script.frames_left = rng.gen_range(20..90);

            if rng.gen_bool(0.2) {
                action_events.write(InputActionEvent::pressed(entity, JUMP));
                script.jump_held = true;
            }
            if rng.gen_bool(0.05) {
                action_events.write(InputActionEvent::pressed(entity, TEST_LOG));
            }
        }

        script.frames_left -= 1;

        if let Some(mut controller) = controller {
            controller.add_yaw_input(script.yaw_rate / SIMULATION_HZ as f32);
        }

        axis_events.write(InputAxisEvent::new(entity, MOVE_FORWARD, script.forward));
        axis_events.write(InputAxisEvent::new(entity, MOVE_RIGHT, script.right));
    }
}

/// Demo Plugin: scripted input перед dispatch
pub struct ScriptedInputPlugin;

impl Plugin for ScriptedInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            drive_scripted_input
                .before(dispatch_axis_input)
                .before(dispatch_action_input),
        );
    }
}

/// Headless App с одним possessed scripted персонажем
pub fn create_demo_app(variant: CharacterVariant, seed: u64) -> anyhow::Result<(App, Entity)> {
    let config = variant.config();
    config.validate()?;

    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin, ScriptedInputPlugin));

    let character = spawn_character(
        &mut app.world_mut().commands(),
        config,
        format!("{}Character", variant),
        Vec3::ZERO,
        Some(Controller::default()),
    );
    app.world_mut().flush();
    app.world_mut()
        .entity_mut(character)
        .insert(ScriptedInput::default());

    Ok((app, character))
}
