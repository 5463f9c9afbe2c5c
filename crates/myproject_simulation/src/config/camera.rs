//! Camera rig и capsule — статическая конфигурация персонажа
//!
//! Spring arm (camera boom) + follow camera на его конце.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::ControlRotation;

/// Spring arm + follow camera
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct CameraRig {
    /// Длина boom (cm)
    pub target_arm_length: f32,
    /// Boom вращается вместе с control rotation контроллера
    pub boom_uses_pawn_control_rotation: bool,
    /// Камера вращается относительно boom (обычно false — смотрит вдоль boom)
    pub camera_uses_pawn_control_rotation: bool,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            target_arm_length: 300.0,
            boom_uses_pawn_control_rotation: true,
            camera_uses_pawn_control_rotation: false,
        }
    }
}

impl CameraRig {
    /// Rotation boom'а: control rotation (если разрешено и контроллер есть),
    /// иначе yaw тела персонажа
    pub fn boom_rotation(&self, control: Option<&ControlRotation>, body_yaw: f32) -> ControlRotation {
        match control {
            Some(control) if self.boom_uses_pawn_control_rotation => *control,
            _ => ControlRotation::from_yaw(body_yaw),
        }
    }

    /// Позиция камеры: pivot минус forward boom'а на длину arm
    pub fn camera_location(&self, pivot: Vec3, boom: &ControlRotation) -> Vec3 {
        pivot - boom.direction() * self.target_arm_length
    }

    /// Куда смотрит камера: вдоль control rotation (если разрешено и
    /// контроллер есть), иначе вдоль boom на pivot
    pub fn camera_look_at(&self, pivot: Vec3, location: Vec3, control: Option<&ControlRotation>) -> Vec3 {
        match control {
            Some(control) if self.camera_uses_pawn_control_rotation => {
                location + control.direction() * self.target_arm_length
            }
            _ => pivot,
        }
    }
}

/// Capsule коллизии (origin персонажа в центре капсулы)
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct CapsuleShape {
    pub radius: f32,
    pub half_height: f32,
}

impl Default for CapsuleShape {
    fn default() -> Self {
        // Engine default для character capsule
        Self {
            radius: 34.0,
            half_height: 88.0,
        }
    }
}
