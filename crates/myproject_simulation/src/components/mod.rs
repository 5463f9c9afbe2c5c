//! ECS Components для character entity
//!
//! Организация:
//! - character: marker (Character) + required компоненты
//! - controller: possession и control rotation (Controller, ControlRotation)
//! - motion: PendingMovementInput, CharacterMotion, FollowCamera

pub mod character;
pub mod controller;
pub mod motion;

// Re-exports для удобного импорта
pub use character::*;
pub use controller::*;
pub use motion::*;
