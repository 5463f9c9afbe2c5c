//! Motion tuning и rotation policy персонажа
//!
//! Единицы: сантиметры, секунды, градусы
//! (max_walk_speed 600 = 6 m/s).

use anyhow::ensure;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Default engine значения (используются там, где пресет их не переопределяет)
pub const DEFAULT_MAX_ACCELERATION: f32 = 2048.0;
pub const DEFAULT_ROTATION_RATE_YAW: f32 = 360.0;
pub const DEFAULT_JUMP_Z_VELOCITY: f32 = 420.0;
pub const DEFAULT_AIR_CONTROL: f32 = 0.05;
pub const DEFAULT_GRAVITY_Z: f32 = -980.0;

/// Параметры движения (общие для всех вариантов персонажа)
///
/// Инвариант (после validate): все скорости/ускорения конечны и ≥ 0,
/// 0 ≤ air_control ≤ 1, gravity_z ≤ 0.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct MotionProfile {
    /// Максимальная скорость ходьбы (cm/s)
    pub max_walk_speed: f32,
    /// Ускорение при полном input (cm/s²)
    pub max_acceleration: f32,
    /// Торможение без input на земле (cm/s²)
    pub braking_deceleration_walking: f32,
    /// Скорость поворота к направлению движения (deg/s)
    pub rotation_rate_yaw: f32,
    /// Вертикальная скорость прыжка (cm/s)
    pub jump_z_velocity: f32,
    /// Доля управления в воздухе (0..1)
    pub air_control: f32,
    /// Гравитация (cm/s², отрицательная)
    pub gravity_z: f32,
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            max_walk_speed: 600.0,
            max_acceleration: DEFAULT_MAX_ACCELERATION,
            braking_deceleration_walking: 2048.0,
            rotation_rate_yaw: DEFAULT_ROTATION_RATE_YAW,
            jump_z_velocity: DEFAULT_JUMP_Z_VELOCITY,
            air_control: DEFAULT_AIR_CONTROL,
            gravity_z: DEFAULT_GRAVITY_Z,
        }
    }
}

impl MotionProfile {
    pub fn validate(&self) -> anyhow::Result<()> {
        let non_negative = [
            ("max_walk_speed", self.max_walk_speed),
            ("max_acceleration", self.max_acceleration),
            ("braking_deceleration_walking", self.braking_deceleration_walking),
            ("rotation_rate_yaw", self.rotation_rate_yaw),
            ("jump_z_velocity", self.jump_z_velocity),
        ];

        for (name, value) in non_negative {
            ensure!(
                value.is_finite() && value >= 0.0,
                "{} must be finite and non-negative, got {}",
                name,
                value
            );
        }

        ensure!(
            (0.0..=1.0).contains(&self.air_control),
            "air_control must be within [0, 1], got {}",
            self.air_control
        );
        ensure!(
            self.gravity_z.is_finite() && self.gravity_z <= 0.0,
            "gravity_z must be finite and non-positive, got {}",
            self.gravity_z
        );

        Ok(())
    }
}

/// Кто определяет yaw тела персонажа
///
/// Варианты персонажа расходятся здесь: MyProject/Player поворачиваются
/// вместе с контроллером, ThirdPerson разворачивается к направлению движения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct RotationPolicy {
    /// Плавно разворачивать тело к ускорению (rotation_rate_yaw)
    pub orient_rotation_to_movement: bool,
    /// Копировать yaw контроллера в тело
    pub use_controller_rotation_yaw: bool,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            orient_rotation_to_movement: false,
            use_controller_rotation_yaw: true,
        }
    }
}
