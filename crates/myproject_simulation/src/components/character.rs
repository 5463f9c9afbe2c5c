//! Character marker component

use bevy::prelude::*;

use crate::config::CharacterConfig;

use super::motion::{CharacterMotion, FollowCamera, PendingMovementInput};

/// Персонаж (любой вариант)
///
/// Автоматически добавляет movement state через Required Components.
/// Вариант и тюнинг — в CharacterConfig.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, CharacterConfig, CharacterMotion, PendingMovementInput, FollowCamera)]
pub struct Character;
