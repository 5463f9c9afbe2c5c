//! Headless character movement (motion integration)
//!
//! Архитектура:
//! - Input dispatch накапливает PendingMovementInput
//! - Здесь: consume input → acceleration / braking / gravity / jump → position
//! - Rotation policy: orient-to-movement или yaw контроллера
//!
//! Детерминизм: fixed timestep (60Hz), никаких зависимостей от wall clock.
//! Пол — плоскость z = 0, origin персонажа в центре капсулы.

use bevy::prelude::*;

use crate::components::{
    wrap_degrees, Character, CharacterMotion, Controller, FollowCamera, PendingMovementInput,
};
use crate::config::{CapsuleShape, CharacterConfig, MotionProfile, RotationPolicy};
use crate::input::InputBindings;
use crate::movement::{JumpIntent, StopJumpIntent};

/// Частота simulation tick
pub const SIMULATION_HZ: f64 = 60.0;

/// Один шаг velocity/facing для персонажа
///
/// `input` — накопленный movement input; длина клампится до 1
/// (доля от max_acceleration), z игнорируется.
pub fn step_motion(
    motion: &mut CharacterMotion,
    profile: &MotionProfile,
    policy: &RotationPolicy,
    input: Vec3,
    controller_yaw: Option<f32>,
    delta: f32,
) {
    let acceleration = input.truncate().clamp_length_max(1.0);
    let has_input = acceleration.length_squared() > 0.0;

    // Горизонталь (X, Y)
    let mut horizontal = motion.velocity.truncate();
    if motion.grounded {
        if has_input {
            horizontal += acceleration * profile.max_acceleration * delta;
            horizontal = horizontal.clamp_length_max(profile.max_walk_speed);
        } else {
            horizontal = brake(horizontal, profile.braking_deceleration_walking * delta);
        }
    } else if has_input {
        // В воздухе управление ослаблено air_control, торможения нет
        horizontal += acceleration * profile.max_acceleration * profile.air_control * delta;
        horizontal = horizontal.clamp_length_max(profile.max_walk_speed);
    }

    // Вертикаль (Z): прыжок только с земли, один прыжок на нажатие.
    // Нажатие в воздухе сбрасывается, не буферизуется до приземления.
    let mut vertical = motion.velocity.z;
    if motion.jump_requested {
        if motion.grounded {
            vertical = profile.jump_z_velocity;
            motion.grounded = false;
        }
        motion.jump_requested = false;
    }
    if !motion.grounded {
        vertical += profile.gravity_z * delta;
    }

    motion.velocity = horizontal.extend(vertical);

    // Facing
    if policy.orient_rotation_to_movement {
        if has_input {
            let target = acceleration.y.atan2(acceleration.x).to_degrees();
            motion.facing_yaw = turn_towards(motion.facing_yaw, target, profile.rotation_rate_yaw * delta);
        }
    } else if policy.use_controller_rotation_yaw {
        if let Some(yaw) = controller_yaw {
            motion.facing_yaw = wrap_degrees(yaw);
        }
    }
}

/// Интеграция velocity → position с полом на высоте half_height капсулы
pub fn integrate_position(
    translation: &mut Vec3,
    motion: &mut CharacterMotion,
    capsule: &CapsuleShape,
    delta: f32,
) {
    *translation += motion.velocity * delta;

    let floor = capsule.half_height;
    if translation.z <= floor {
        translation.z = floor;
        if motion.velocity.z < 0.0 {
            motion.velocity.z = 0.0;
        }
        motion.grounded = true;
    } else {
        motion.grounded = false;
    }
}

/// Торможение без перескока через ноль
fn brake(velocity: Vec2, amount: f32) -> Vec2 {
    let speed = velocity.length();
    if speed <= amount {
        return Vec2::ZERO;
    }
    velocity * ((speed - amount) / speed)
}

/// Поворот к target не быстрее max_delta (градусы), кратчайшим путём
pub fn turn_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = wrap_degrees(target - current);
    if delta.abs() <= max_delta {
        return wrap_degrees(target);
    }
    wrap_degrees(current + max_delta.copysign(delta))
}

/// Jump intents → CharacterMotion.jump_requested
///
/// Release обрабатывается до press: нажатие и отпускание в одном frame
/// всё равно дают прыжок.
pub fn consume_jump_intents(
    mut jump_events: EventReader<JumpIntent>,
    mut stop_jump_events: EventReader<StopJumpIntent>,
    mut characters: Query<&mut CharacterMotion, With<Character>>,
) {
    for event in stop_jump_events.read() {
        if let Ok(mut motion) = characters.get_mut(event.entity) {
            motion.jump_requested = false;
        }
    }

    for event in jump_events.read() {
        if let Ok(mut motion) = characters.get_mut(event.entity) {
            motion.jump_requested = true;
        }
    }
}

/// Система движения персонажей
///
/// Работает в FixedUpdate (60Hz).
pub fn apply_character_movement(
    mut characters: Query<
        (
            &CharacterConfig,
            Option<&Controller>,
            &mut PendingMovementInput,
            &mut CharacterMotion,
            &mut Transform,
        ),
        With<Character>,
    >,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (config, controller, mut pending, mut motion, mut transform) in characters.iter_mut() {
        let input = pending.consume();
        let controller_yaw = controller.map(|c| c.rotation.yaw);

        step_motion(
            &mut motion,
            &config.motion,
            &config.rotation,
            input,
            controller_yaw,
            delta,
        );
        integrate_position(&mut transform.translation, &mut motion, &config.capsule, delta);
        transform.rotation = Quat::from_rotation_z(motion.facing_yaw.to_radians());
    }
}

/// Follow camera: позиция на конце spring arm
pub fn update_follow_cameras(
    mut characters: Query<
        (
            &CharacterConfig,
            &Transform,
            &CharacterMotion,
            Option<&Controller>,
            &mut FollowCamera,
        ),
        With<Character>,
    >,
) {
    for (config, transform, motion, controller, mut camera) in characters.iter_mut() {
        let pivot = transform.translation;
        let control = controller.map(|c| &c.rotation);
        let boom = config.camera.boom_rotation(control, motion.facing_yaw);

        camera.location = config.camera.camera_location(pivot, &boom);
        camera.look_at = config.camera.camera_look_at(pivot, camera.location, control);
    }
}

/// Plugin движения персонажей
///
/// Регистрирует системы в FixedUpdate для детерминизма.
pub struct CharacterMovementPlugin;

impl Plugin for CharacterMovementPlugin {
    fn build(&self, app: &mut App) {
        // add_event идемпотентен: input plugin регистрирует те же события
        app.add_event::<JumpIntent>().add_event::<StopJumpIntent>();

        app.add_systems(
            FixedUpdate,
            (
                consume_jump_intents,
                apply_character_movement,
                update_follow_cameras,
            )
                .chain(), // Последовательное выполнение
        );
    }
}

/// Spawn helper для персонажа
///
/// Создает entity с полным набором компонентов:
/// - Character (+ required: Transform, CharacterMotion, PendingMovementInput, FollowCamera)
/// - CharacterConfig пресета
/// - InputBindings по BindingSet пресета
/// - Controller, если персонаж сразу possessed
///
/// Позиция по z поднимается до пола капсулы.
pub fn spawn_character(
    commands: &mut Commands,
    config: CharacterConfig,
    name: impl Into<String>,
    position: Vec3,
    controller: Option<Controller>,
) -> Entity {
    let translation = Vec3::new(position.x, position.y, position.z.max(config.capsule.half_height));

    let mut entity = commands.spawn((
        Character,
        Name::new(name.into()),
        Transform::from_translation(translation),
        InputBindings::for_set(config.bindings),
        config,
    ));

    if let Some(controller) = controller {
        entity.insert(controller);
    }

    entity.id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CharacterVariant;

    const DELTA: f32 = 1.0 / 60.0;

    #[test]
    fn test_acceleration_capped_at_max_walk_speed() {
        let config = CharacterVariant::Player.config();
        let mut motion = CharacterMotion::default();

        // 2 секунды полного input вперёд
        for _ in 0..120 {
            step_motion(&mut motion, &config.motion, &config.rotation, Vec3::X, Some(0.0), DELTA);
        }

        assert!((motion.horizontal_speed() - 600.0).abs() < 1e-2, "speed = {}", motion.horizontal_speed());
        assert!(motion.velocity.y.abs() < 1e-3);
    }

    #[test]
    fn test_input_longer_than_one_is_clamped() {
        let config = CharacterVariant::Player.config();
        let mut unit = CharacterMotion::default();
        let mut doubled = CharacterMotion::default();

        step_motion(&mut unit, &config.motion, &config.rotation, Vec3::X, None, DELTA);
        step_motion(&mut doubled, &config.motion, &config.rotation, Vec3::X * 2.0, None, DELTA);

        assert_eq!(unit.velocity, doubled.velocity);
    }

    #[test]
    fn test_braking_stops_without_overshoot() {
        let config = CharacterVariant::MyProject.config();
        let mut motion = CharacterMotion {
            velocity: Vec3::new(600.0, 0.0, 0.0),
            ..Default::default()
        };

        // 600 / 2048 ≈ 0.29 sec → ~18 ticks
        for _ in 0..30 {
            step_motion(&mut motion, &config.motion, &config.rotation, Vec3::ZERO, None, DELTA);
            assert!(motion.velocity.x >= 0.0);
        }

        assert_eq!(motion.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let config = CharacterVariant::ThirdPerson.config();
        let mut motion = CharacterMotion {
            jump_requested: true,
            ..Default::default()
        };

        step_motion(&mut motion, &config.motion, &config.rotation, Vec3::ZERO, None, DELTA);
        assert!(!motion.grounded);
        assert!(!motion.jump_requested);
        // 700 + gravity * dt
        assert!((motion.velocity.z - (700.0 - 980.0 * DELTA)).abs() < 1e-3);

        // Повторный запрос в воздухе не даёт второй прыжок и сбрасывается
        motion.jump_requested = true;
        let before = motion.velocity.z;
        step_motion(&mut motion, &config.motion, &config.rotation, Vec3::ZERO, None, DELTA);
        assert!(motion.velocity.z < before);
        assert!(!motion.jump_requested);
    }

    #[test]
    fn test_mid_air_press_does_not_jump_after_landing() {
        let config = CharacterVariant::ThirdPerson.config();
        let mut translation = Vec3::new(0.0, 0.0, config.capsule.half_height);
        let mut motion = CharacterMotion {
            jump_requested: true,
            ..Default::default()
        };
        let mut jumps = 0;

        for tick in 0..300 {
            // Повторное нажатие на 10-м tick, когда персонаж уже в воздухе
            if tick == 10 {
                assert!(!motion.grounded);
                motion.jump_requested = true;
            }

            let was_grounded = motion.grounded;
            step_motion(&mut motion, &config.motion, &config.rotation, Vec3::ZERO, None, DELTA);
            if was_grounded && !motion.grounded {
                jumps += 1;
            }
            integrate_position(&mut translation, &mut motion, &config.capsule, DELTA);
        }

        assert_eq!(jumps, 1);
        assert!(motion.grounded);
        assert_eq!(translation.z, config.capsule.half_height);
    }

    #[test]
    fn test_air_control_reduces_acceleration() {
        let config = CharacterVariant::ThirdPerson.config();
        let mut ground = CharacterMotion::default();
        let mut air = CharacterMotion {
            grounded: false,
            ..Default::default()
        };

        step_motion(&mut ground, &config.motion, &config.rotation, Vec3::X, None, DELTA);
        step_motion(&mut air, &config.motion, &config.rotation, Vec3::X, None, DELTA);

        assert!((air.velocity.x - ground.velocity.x * 0.35).abs() < 1e-3);
    }

    #[test]
    fn test_orient_rotation_to_movement_is_rate_limited() {
        let config = CharacterVariant::ThirdPerson.config();
        let mut motion = CharacterMotion::default();

        // Input вдоль +Y → target yaw 90°, 540 deg/s * 1/60 = 9° за tick
        step_motion(&mut motion, &config.motion, &config.rotation, Vec3::Y, Some(-45.0), DELTA);
        assert!((motion.facing_yaw - 9.0).abs() < 1e-3);

        for _ in 0..20 {
            step_motion(&mut motion, &config.motion, &config.rotation, Vec3::Y, Some(-45.0), DELTA);
        }
        assert!((motion.facing_yaw - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_controller_yaw_policy_copies_yaw() {
        let config = CharacterVariant::MyProject.config();
        let mut motion = CharacterMotion::default();

        step_motion(&mut motion, &config.motion, &config.rotation, Vec3::ZERO, Some(135.0), DELTA);
        assert_eq!(motion.facing_yaw, 135.0);

        // Без контроллера facing не меняется
        step_motion(&mut motion, &config.motion, &config.rotation, Vec3::ZERO, None, DELTA);
        assert_eq!(motion.facing_yaw, 135.0);
    }

    #[test]
    fn test_turn_towards_takes_short_way() {
        // 170 → -170: кратчайший путь через 180, а не через 0
        let next = turn_towards(170.0, -170.0, 5.0);
        assert!((next - 175.0).abs() < 1e-4);

        let snapped = turn_towards(10.0, 12.0, 5.0);
        assert!((snapped - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_integrate_lands_on_capsule_floor() {
        let capsule = CapsuleShape {
            radius: 42.0,
            half_height: 96.0,
        };
        let mut translation = Vec3::new(0.0, 0.0, 97.0);
        let mut motion = CharacterMotion {
            velocity: Vec3::new(0.0, 0.0, -300.0),
            grounded: false,
            ..Default::default()
        };

        integrate_position(&mut translation, &mut motion, &capsule, DELTA);

        assert_eq!(translation.z, 96.0);
        assert_eq!(motion.velocity.z, 0.0);
        assert!(motion.grounded);
    }
}
