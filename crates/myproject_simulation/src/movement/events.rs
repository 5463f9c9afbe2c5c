//! Movement events

use bevy::prelude::*;

use super::resolver::{MovementAxis, MovementCommand};

/// Event: намерение прыгнуть (jump pressed)
///
/// Обрабатывается motion системой: прыжок только если персонаж на земле.
#[derive(Event, Debug, Clone)]
pub struct JumpIntent {
    pub entity: Entity,
}

/// Event: jump released (сбрасывает незавершённый запрос прыжка)
#[derive(Event, Debug, Clone)]
pub struct StopJumpIntent {
    pub entity: Entity,
}

/// Event: команда движения выдана персонажу
///
/// Дублирует то, что накоплено в PendingMovementInput (для тестов и отладки).
#[derive(Event, Debug, Clone)]
pub struct MovementCommandIssued {
    pub entity: Entity,
    pub axis: MovementAxis,
    pub command: MovementCommand,
}
