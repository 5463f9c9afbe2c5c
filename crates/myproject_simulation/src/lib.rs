//! MyProject Simulation Core
//!
//! Headless ECS-симуляция third-person персонажа на Bevy 0.16:
//! - camera-relative movement (yaw контроллера → world-space направление)
//! - таблица input bindings (MoveForward, MoveRight, TestLog, Jump)
//! - три варианта персонажа как пресеты одной конфигурации
//! - headless motion integration + follow camera

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod demo;
pub mod input;
pub mod logger;
pub mod movement;
pub mod physics;

// Re-export базовых типов для удобства
pub use components::*;
pub use config::{
    BindingSet, CameraRig, CapsuleShape, CharacterConfig, CharacterVariant, MotionProfile, RotationPolicy,
};
pub use input::{CharacterInputPlugin, InputActionEvent, InputAxisEvent, InputBindings, TestLogReceived};
pub use logger::{log, log_error, log_info, log_warning};
pub use movement::{
    resolve, resolve_axis, JumpIntent, MovementAxis, MovementCommand, MovementCommandIssued, Orientation,
    StopJumpIntent,
};
pub use physics::{spawn_character, CharacterMovementPlugin, SIMULATION_HZ};

/// Seed по умолчанию (если App не задал свой DeterministicRng)
pub const DEFAULT_SEED: u64 = 42;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Не перетираем RNG, уже вставленный create_headless_app(seed)
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(DEFAULT_SEED));
        }

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .add_plugins((CharacterInputPlugin, CharacterMovementPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Длительность одного simulation tick
pub fn fixed_timestep() -> Duration {
    Duration::from_secs_f64(1.0 / SIMULATION_HZ)
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время шагает вручную (один fixed tick на app.update()), поэтому результат
/// не зависит от wall clock.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(fixed_timestep()));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
