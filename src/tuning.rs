//! Data-driven game balance
//!
//! Every physics constant the simulation reads lives here so a settings file can
//! override it without touching code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and sizing constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to the actor's vertical velocity every tick
    pub gravity: f32,
    /// Magnitude of the upward launch velocity of a jump
    pub jump_speed: f32,
    /// Horizontal pixels per tick per held direction key
    pub walk_step: f32,
    /// Patrol agent pixels per tick
    pub agent_speed: f32,
    pub actor_width: f32,
    /// Standing height; crouching halves it
    pub actor_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            walk_step: WALK_STEP,
            agent_speed: AGENT_SPEED,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
        }
    }
}

impl Tuning {
    /// Height lost (and `y` gained) when crouching
    #[inline]
    pub fn crouch_delta(&self) -> f32 {
        self.actor_height / 2.0
    }
}
