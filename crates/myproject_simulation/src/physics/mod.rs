//! Physics simulation module
//!
//! Headless character movement: acceleration, braking, gravity, jump,
//! rotation policy, follow camera.

pub mod movement;

// Re-export основных типов
pub use movement::{
    apply_character_movement, consume_jump_intents, integrate_position, spawn_character,
    step_motion, turn_towards, update_follow_cameras, CharacterMovementPlugin, SIMULATION_HZ,
};
