//! Camera-relative movement direction
//!
//! Превращает пару осей input (forward, strafe) в world-space команды движения
//! относительно yaw контроллера.
//!
//! # Coordinate System
//! - Z-up, yaw вращает вокруг +Z (градусы)
//! - Положительный yaw поворачивает +X в сторону +Y
//! - forward(θ) = (cos θ, sin θ, 0)
//! - right(θ) = (-sin θ, cos θ, 0)
//!
//! # Examples
//! - θ = 0°: forward = +X, right = +Y
//! - θ = 90°: forward = +Y, right = -X

use bevy::prelude::*;

/// Порог "нет input": |value| ≤ порога не даёт команды
pub const AXIS_DEAD_ZONE: f32 = 1.0e-8;

/// Ось movement input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum MovementAxis {
    /// Вперёд/назад (local +X)
    Forward,
    /// Strafe вправо/влево (local +Y)
    Right,
}

/// Опорная ориентация для движения — только yaw (pitch/roll отброшены)
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct Orientation {
    yaw_degrees: f32,
}

impl Orientation {
    pub fn from_yaw_degrees(yaw_degrees: f32) -> Self {
        Self { yaw_degrees }
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    /// Flattened rotation (pitch = 0, roll = 0)
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.yaw_degrees.to_radians())
    }

    /// Unit forward (local +X, rotated by yaw)
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Unit right (local +Y, rotated by yaw)
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    pub fn basis(&self, axis: MovementAxis) -> Vec3 {
        match axis {
            MovementAxis::Forward => self.forward(),
            MovementAxis::Right => self.right(),
        }
    }
}

/// Одна команда движения: world-space direction + signed magnitude
///
/// Magnitude не клампится: значения вне [-1, 1] проходят как есть,
/// clamp делает motion система.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct MovementCommand {
    pub direction: Vec3,
    pub magnitude: f32,
}

impl MovementCommand {
    pub fn to_vector(&self) -> Vec3 {
        self.direction * self.magnitude
    }
}

/// true если value считается "нет input" (NaN тоже)
pub fn is_nearly_zero(value: f32) -> bool {
    value.is_nan() || value.abs() <= AXIS_DEAD_ZONE
}

/// Резолвит одно axis событие
///
/// `None` orientation — персонаж без контроллера (idle, не ошибка).
pub fn resolve_axis(
    orientation: Option<Orientation>,
    axis: MovementAxis,
    value: f32,
) -> Option<MovementCommand> {
    let orientation = orientation?;
    if is_nearly_zero(value) {
        return None;
    }

    Some(MovementCommand {
        direction: orientation.basis(axis),
        magnitude: value,
    })
}

/// Резолвит пару осей в 0..2 команд (forward первой)
///
/// Команды независимы: сумма векторов не зависит от порядка.
pub fn resolve(
    orientation: Option<Orientation>,
    forward_axis: f32,
    right_axis: f32,
) -> Vec<MovementCommand> {
    [
        (MovementAxis::Forward, forward_axis),
        (MovementAxis::Right, right_axis),
    ]
    .into_iter()
    .filter_map(|(axis, value)| resolve_axis(orientation, axis, value))
    .collect()
}
