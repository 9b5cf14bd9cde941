//! Brick Hop - a minimal side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (actor physics, patrols, collisions, world state)
//! - `renderer`: wgpu rendering pipeline
//! - `platform`: Keyboard snapshot and frame pacing
//! - `settings`: Runtime configuration loaded from JSON
//! - `tuning`: Data-driven physics constants

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second, one render per tick)
    pub const TICK_RATE: u32 = 60;

    /// World dimensions (pixels)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Actor defaults
    pub const ACTOR_WIDTH: f32 = 30.0;
    pub const ACTOR_HEIGHT: f32 = 60.0;
    /// Added to vertical velocity every tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.8;
    /// Launch speed of a jump (applied upward)
    pub const JUMP_SPEED: f32 = 15.0;
    /// Horizontal step per tick while a direction key is held
    pub const WALK_STEP: f32 = 5.0;

    /// Patrol agent defaults
    pub const AGENT_SIZE: f32 = 30.0;
    pub const AGENT_SPEED: f32 = 2.0;

    /// Fixed obstacle sizes
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_HEIGHT: f32 = 100.0;
    pub const BRICK_SIZE: f32 = 30.0;
}
