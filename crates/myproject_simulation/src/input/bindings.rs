//! Input binding table: имя input → handler
//!
//! Заменяет override "setup player input": персонаж получает таблицу при spawn,
//! dispatch системы ищут в ней имя события.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::config::BindingSet;
use crate::movement::MovementAxis;

pub const MOVE_FORWARD: &str = "MoveForward";
pub const MOVE_RIGHT: &str = "MoveRight";
pub const TEST_LOG: &str = "TestLog";
pub const JUMP: &str = "Jump";

/// Фаза discrete action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum InputPhase {
    Pressed,
    Released,
}

/// Что делает action binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum CharacterAction {
    /// Диагностическая строка в лог
    TestLog,
    Jump,
    StopJumping,
}

/// Таблица bindings одного персонажа
#[derive(Component, Debug, Clone, Default)]
pub struct InputBindings {
    axes: HashMap<String, MovementAxis>,
    actions: HashMap<(String, InputPhase), CharacterAction>,
}

impl InputBindings {
    pub fn empty() -> Self {
        Self::default()
    }

    /// MoveForward / MoveRight / TestLog
    pub fn standard() -> Self {
        Self::empty()
            .with_axis(MOVE_FORWARD, MovementAxis::Forward)
            .with_axis(MOVE_RIGHT, MovementAxis::Right)
            .with_action(TEST_LOG, InputPhase::Pressed, CharacterAction::TestLog)
    }

    /// Standard + Jump pressed/released
    pub fn third_person() -> Self {
        Self::standard()
            .with_action(JUMP, InputPhase::Pressed, CharacterAction::Jump)
            .with_action(JUMP, InputPhase::Released, CharacterAction::StopJumping)
    }

    pub fn for_set(set: BindingSet) -> Self {
        match set {
            BindingSet::Standard => Self::standard(),
            BindingSet::ThirdPerson => Self::third_person(),
        }
    }

    pub fn with_axis(mut self, name: impl Into<String>, axis: MovementAxis) -> Self {
        self.bind_axis(name, axis);
        self
    }

    pub fn with_action(mut self, name: impl Into<String>, phase: InputPhase, action: CharacterAction) -> Self {
        self.bind_action(name, phase, action);
        self
    }

    /// Повторный bind того же имени заменяет handler
    pub fn bind_axis(&mut self, name: impl Into<String>, axis: MovementAxis) {
        self.axes.insert(name.into(), axis);
    }

    pub fn bind_action(&mut self, name: impl Into<String>, phase: InputPhase, action: CharacterAction) {
        self.actions.insert((name.into(), phase), action);
    }

    pub fn axis(&self, name: &str) -> Option<MovementAxis> {
        self.axes.get(name).copied()
    }

    pub fn action(&self, name: &str, phase: InputPhase) -> Option<CharacterAction> {
        // Ключ — owned String, поэтому lookup через to_owned
        self.actions.get(&(name.to_owned(), phase)).copied()
    }

    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let bindings = InputBindings::standard();

        assert_eq!(bindings.axis(MOVE_FORWARD), Some(MovementAxis::Forward));
        assert_eq!(bindings.axis(MOVE_RIGHT), Some(MovementAxis::Right));
        assert_eq!(bindings.action(TEST_LOG, InputPhase::Pressed), Some(CharacterAction::TestLog));
        assert_eq!(bindings.action(TEST_LOG, InputPhase::Released), None);
        assert_eq!(bindings.action(JUMP, InputPhase::Pressed), None);
        assert_eq!(bindings.axis_count(), 2);
        assert_eq!(bindings.action_count(), 1);
    }

    #[test]
    fn test_third_person_adds_jump() {
        let bindings = InputBindings::for_set(BindingSet::ThirdPerson);

        assert_eq!(bindings.action(JUMP, InputPhase::Pressed), Some(CharacterAction::Jump));
        assert_eq!(bindings.action(JUMP, InputPhase::Released), Some(CharacterAction::StopJumping));
        assert_eq!(bindings.action_count(), 3);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let bindings = InputBindings::standard();
        assert_eq!(bindings.axis("moveforward"), None);
    }

    #[test]
    fn test_rebind_replaces_handler() {
        let mut bindings = InputBindings::standard();
        bindings.bind_axis(MOVE_FORWARD, MovementAxis::Right);

        assert_eq!(bindings.axis(MOVE_FORWARD), Some(MovementAxis::Right));
        assert_eq!(bindings.axis_count(), 2);
    }
}
