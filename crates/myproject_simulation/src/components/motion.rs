//! Motion компоненты: накопленный input, состояние движения, follow camera

use bevy::prelude::*;

use crate::movement::MovementCommand;

/// Накопленный movement input за текущий tick ("add movement input")
///
/// Архитектура:
/// - Input dispatch добавляет direction * magnitude каждой команды
/// - Motion система забирает вектор (consume) и обнуляет
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PendingMovementInput {
    pub vector: Vec3,
}

impl PendingMovementInput {
    pub fn add(&mut self, command: &MovementCommand) {
        self.vector += command.to_vector();
    }

    pub fn consume(&mut self) -> Vec3 {
        std::mem::take(&mut self.vector)
    }

    pub fn is_empty(&self) -> bool {
        self.vector == Vec3::ZERO
    }
}

/// Состояние движения персонажа (velocity, facing, ground)
///
/// Позиция живёт в Transform.translation.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CharacterMotion {
    /// Скорость (cm/s)
    pub velocity: Vec3,
    /// Yaw тела персонажа (градусы)
    pub facing_yaw: f32,
    /// На земле ли персонаж
    pub grounded: bool,
    /// Jump pressed и ещё не выполнен
    pub jump_requested: bool,
}

impl Default for CharacterMotion {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            facing_yaw: 0.0,
            grounded: true,
            jump_requested: false,
        }
    }
}

impl CharacterMotion {
    pub fn horizontal_speed(&self) -> f32 {
        self.velocity.truncate().length()
    }
}

/// Follow camera на конце spring arm (пересчитывается каждый tick)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FollowCamera {
    pub location: Vec3,
    /// Точка, куда смотрит камера (pivot или вдоль control rotation)
    pub look_at: Vec3,
}
