//! Movement domain — направление движения и movement intents
//!
//! Содержит:
//! - resolver (yaw + оси input → MovementCommand)
//! - events (JumpIntent, StopJumpIntent, MovementCommandIssued)

pub mod events;
pub mod resolver;

pub use events::*;
pub use resolver::*;
