//! Input dispatch systems (ECS)
//!
//! # Архитектура
//!
//! ```text
//! InputAxisEvent / InputActionEvent
//!     ↓
//! InputBindings (таблица персонажа)
//!     ↓
//! resolve_axis (yaw контроллера) → PendingMovementInput + MovementCommandIssued
//! TestLog → лог + TestLogReceived
//! Jump → JumpIntent / StopJumpIntent
//! ```

use bevy::prelude::*;

use crate::components::{Controller, PendingMovementInput};
use crate::logger::{log, log_info, log_warning};
use crate::movement::{resolve_axis, JumpIntent, MovementCommandIssued, StopJumpIntent};

use super::bindings::{CharacterAction, InputBindings};
use super::events::{InputActionEvent, InputAxisEvent, TestLogReceived};

/// Axis dispatch: имя оси → MovementAxis → команда движения
///
/// - Нет Controller → ничего (персонаж не possessed)
/// - |value| ≈ 0 → ничего
/// - Неизвестное имя → debug лог, пропуск
pub fn dispatch_axis_input(
    mut axis_events: EventReader<InputAxisEvent>,
    mut issued_events: EventWriter<MovementCommandIssued>,
    mut characters: Query<(&InputBindings, Option<&Controller>, &mut PendingMovementInput)>,
) {
    for event in axis_events.read() {
        let Ok((bindings, controller, mut pending)) = characters.get_mut(event.entity) else {
            log_warning(&format!(
                "Axis input '{}' for entity {:?} without input bindings",
                event.name, event.entity
            ));
            continue;
        };

        let Some(axis) = bindings.axis(&event.name) else {
            log(&format!("Unbound axis '{}' on {:?}", event.name, event.entity));
            continue;
        };

        let orientation = controller.map(Controller::orientation);
        let Some(command) = resolve_axis(orientation, axis, event.value) else {
            continue;
        };

        pending.add(&command);
        issued_events.write(MovementCommandIssued {
            entity: event.entity,
            axis,
            command,
        });
    }
}

/// Action dispatch: (имя, фаза) → CharacterAction
pub fn dispatch_action_input(
    mut action_events: EventReader<InputActionEvent>,
    mut jump_events: EventWriter<JumpIntent>,
    mut stop_jump_events: EventWriter<StopJumpIntent>,
    mut test_log_events: EventWriter<TestLogReceived>,
    characters: Query<(&InputBindings, Option<&Name>)>,
) {
    for event in action_events.read() {
        let Ok((bindings, name)) = characters.get(event.entity) else {
            log_warning(&format!(
                "Action '{}' for entity {:?} without input bindings",
                event.name, event.entity
            ));
            continue;
        };

        let Some(action) = bindings.action(&event.name, event.phase) else {
            log(&format!(
                "Unbound action '{}' ({:?}) on {:?}",
                event.name, event.phase, event.entity
            ));
            continue;
        };

        match action {
            CharacterAction::TestLog => {
                let message = format!("TestLog input received on {}", display_name(event.entity, name));
                log_info(&message);
                test_log_events.write(TestLogReceived {
                    entity: event.entity,
                    message,
                });
            }
            CharacterAction::Jump => {
                jump_events.write(JumpIntent { entity: event.entity });
            }
            CharacterAction::StopJumping => {
                stop_jump_events.write(StopJumpIntent { entity: event.entity });
            }
        }
    }
}

/// Имя персонажа для логов: Name компонент или entity id
pub fn display_name(entity: Entity, name: Option<&Name>) -> String {
    match name {
        Some(name) => name.as_str().to_owned(),
        None => format!("{:?}", entity),
    }
}
