//! Character configuration
//!
//! Три варианта персонажа (MyProject, Player, ThirdPerson) отличаются только
//! параметрами — одна CharacterConfig вместо трёх копий логики.
//!
//! Содержит:
//! - profile (MotionProfile, RotationPolicy)
//! - camera (CameraRig, CapsuleShape)
//! - CharacterVariant + пресеты

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod camera;
pub mod profile;


pub use camera::*;
pub use profile::*;

/// Какую таблицу input bindings получает персонаж
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum BindingSet {
    /// MoveForward, MoveRight, TestLog
    Standard,
    /// Standard + Jump (pressed/released)
    ThirdPerson,
}

/// Вариант персонажа (пресет)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum CharacterVariant {
    MyProject,
    Player,
    ThirdPerson,
}

impl CharacterVariant {
    pub const ALL: [CharacterVariant; 3] = [
        CharacterVariant::MyProject,
        CharacterVariant::Player,
        CharacterVariant::ThirdPerson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterVariant::MyProject => "MyProject",
            CharacterVariant::Player => "Player",
            CharacterVariant::ThirdPerson => "ThirdPerson",
        }
    }

    pub fn config(&self) -> CharacterConfig {
        match self {
            CharacterVariant::MyProject | CharacterVariant::Player => CharacterConfig::template(*self),
            CharacterVariant::ThirdPerson => CharacterConfig::third_person(),
        }
    }
}

impl fmt::Display for CharacterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "myproject" => Ok(CharacterVariant::MyProject),
            "player" => Ok(CharacterVariant::Player),
            "thirdperson" => Ok(CharacterVariant::ThirdPerson),
            _ => bail!(
                "unknown character variant '{}' (expected one of: MyProject, Player, ThirdPerson)",
                s
            ),
        }
    }
}

/// Полная конфигурация персонажа
///
/// Attached к character entity при spawn; motion система читает её каждый tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct CharacterConfig {
    pub variant: CharacterVariant,
    pub motion: MotionProfile,
    pub rotation: RotationPolicy,
    pub camera: CameraRig,
    pub capsule: CapsuleShape,
    pub bindings: BindingSet,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        CharacterVariant::MyProject.config()
    }
}

impl CharacterConfig {
    /// Template tuning (MyProject / Player): walk speed + braking,
    /// остальное — engine defaults, тело следует за yaw контроллера
    fn template(variant: CharacterVariant) -> Self {
        Self {
            variant,
            motion: MotionProfile {
                max_walk_speed: 600.0,
                braking_deceleration_walking: 2048.0,
                ..Default::default()
            },
            rotation: RotationPolicy {
                orient_rotation_to_movement: false,
                use_controller_rotation_yaw: true,
            },
            camera: CameraRig::default(),
            capsule: CapsuleShape::default(),
            bindings: BindingSet::Standard,
        }
    }

    /// ThirdPerson: тело разворачивается к движению, прыжок, air control
    fn third_person() -> Self {
        Self {
            variant: CharacterVariant::ThirdPerson,
            motion: MotionProfile {
                max_walk_speed: 600.0,
                braking_deceleration_walking: 2048.0,
                rotation_rate_yaw: 540.0,
                jump_z_velocity: 700.0,
                air_control: 0.35,
                ..Default::default()
            },
            rotation: RotationPolicy {
                orient_rotation_to_movement: true,
                use_controller_rotation_yaw: false,
            },
            camera: CameraRig::default(),
            capsule: CapsuleShape {
                radius: 42.0,
                half_height: 96.0,
            },
            bindings: BindingSet::ThirdPerson,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.motion.validate()?;
        if !(self.capsule.radius > 0.0 && self.capsule.half_height >= self.capsule.radius) {
            bail!(
                "capsule must have radius > 0 and half_height >= radius, got {:?}",
                self.capsule
            );
        }
        if !(self.camera.target_arm_length.is_finite() && self.camera.target_arm_length >= 0.0) {
            bail!(
                "camera arm length must be finite and non-negative, got {}",
                self.camera.target_arm_length
            );
        }
        Ok(())
    }
}
