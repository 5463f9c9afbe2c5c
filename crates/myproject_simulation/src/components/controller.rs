//! Controller — источник ориентации для player-controlled персонажа
//!
//! Персонаж БЕЗ Controller считается непосессированным: axis input игнорируется
//! (idle, не ошибка).

use bevy::prelude::*;

use crate::movement::Orientation;

/// Предел pitch камеры (градусы)
pub const PITCH_LIMIT: f32 = 89.9;

/// Control rotation: pitch/yaw/roll в градусах
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct ControlRotation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl ControlRotation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn from_yaw(yaw: f32) -> Self {
        Self::new(0.0, yaw, 0.0)
    }

    /// Flatten до yaw (pitch и roll не влияют на движение)
    pub fn orientation(&self) -> Orientation {
        Orientation::from_yaw_degrees(self.yaw)
    }

    /// Unit forward с учётом pitch (для camera boom)
    pub fn direction(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch)
    }
}

/// Controller компонент (possession)
///
/// # Possession
/// ```ignore
/// commands.entity(character).insert(Controller::default());
/// commands.entity(character).remove::<Controller>();
/// ```
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Controller {
    pub rotation: ControlRotation,
}

impl Controller {
    pub fn new(rotation: ControlRotation) -> Self {
        Self { rotation }
    }

    pub fn orientation(&self) -> Orientation {
        self.rotation.orientation()
    }

    /// Mouse look: yaw оборачивается в [-180, 180)
    pub fn add_yaw_input(&mut self, degrees: f32) {
        self.rotation.yaw = wrap_degrees(self.rotation.yaw + degrees);
    }

    /// Mouse look: pitch клампится в ±PITCH_LIMIT
    pub fn add_pitch_input(&mut self, degrees: f32) {
        self.rotation.pitch = (self.rotation.pitch + degrees).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

/// Оборачивает угол в [-180, 180)
pub fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_ignores_pitch_and_roll() {
        let pitched = ControlRotation::new(-40.0, 30.0, 15.0).orientation();
        let flat = ControlRotation::from_yaw(30.0).orientation();

        assert_eq!(pitched, flat);
        assert!(pitched.forward().z.abs() < 1e-6);
    }

    #[test]
    fn test_yaw_input_wraps() {
        let mut controller = Controller::new(ControlRotation::from_yaw(170.0));
        controller.add_yaw_input(20.0);
        assert!((controller.rotation.yaw - (-170.0)).abs() < 1e-4);

        controller.add_yaw_input(-30.0);
        assert!((controller.rotation.yaw - 160.0).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_input_clamped() {
        let mut controller = Controller::default();
        controller.add_pitch_input(200.0);
        assert_eq!(controller.rotation.pitch, PITCH_LIMIT);

        controller.add_pitch_input(-500.0);
        assert_eq!(controller.rotation.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn test_direction_is_unit() {
        let direction = ControlRotation::new(25.0, -70.0, 0.0).direction();
        assert!((direction.length() - 1.0).abs() < 1e-5);
        assert!(direction.z > 0.0);
    }
}
