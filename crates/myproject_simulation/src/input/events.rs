//! Input events
//!
//! Генерируются внешним input источником (устройство, replay, демо-скрипт)
//! и обрабатываются dispatch системами.

use bevy::prelude::*;

use super::bindings::InputPhase;

/// Axis event — значение оси за этот frame
///
/// # Fields
/// - `name`: имя оси в таблице bindings ("MoveForward", "MoveRight")
/// - `value`: обычно -1.0..=1.0, не клампится
#[derive(Event, Debug, Clone)]
pub struct InputAxisEvent {
    pub entity: Entity,
    pub name: String,
    pub value: f32,
}

impl InputAxisEvent {
    pub fn new(entity: Entity, name: impl Into<String>, value: f32) -> Self {
        Self {
            entity,
            name: name.into(),
            value,
        }
    }
}

/// Discrete action event (pressed/released)
#[derive(Event, Debug, Clone)]
pub struct InputActionEvent {
    pub entity: Entity,
    pub name: String,
    pub phase: InputPhase,
}

impl InputActionEvent {
    pub fn pressed(entity: Entity, name: impl Into<String>) -> Self {
        Self {
            entity,
            name: name.into(),
            phase: InputPhase::Pressed,
        }
    }

    pub fn released(entity: Entity, name: impl Into<String>) -> Self {
        Self {
            entity,
            name: name.into(),
            phase: InputPhase::Released,
        }
    }
}

/// Event: TestLog action сработал (строка уже записана в лог)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct TestLogReceived {
    pub entity: Entity,
    pub message: String,
}
