//! Player input module
//!
//! Преобразует именованные input события в команды движения и actions.
//!
//! # Компоненты модуля
//!
//! - `bindings` - таблица {имя → handler} (InputBindings)
//! - `events` - ECS события (InputAxisEvent, InputActionEvent, TestLogReceived)
//! - `systems` - dispatch системы

use bevy::prelude::*;

pub mod bindings;
pub mod events;
pub mod systems;

pub use bindings::*;
pub use events::*;
pub use systems::*;

use crate::movement::{JumpIntent, MovementCommandIssued, StopJumpIntent};

/// Input Plugin
///
/// Dispatch работает в PreUpdate: накопленный input забирается motion
/// системами (FixedUpdate) в том же frame.
pub struct CharacterInputPlugin;

impl Plugin for CharacterInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<InputAxisEvent>()
            .add_event::<InputActionEvent>()
            .add_event::<TestLogReceived>()
            .add_event::<MovementCommandIssued>()
            .add_event::<JumpIntent>()
            .add_event::<StopJumpIntent>();

        app.add_systems(
            PreUpdate,
            (dispatch_axis_input, dispatch_action_input).chain(),
        );
    }
}
