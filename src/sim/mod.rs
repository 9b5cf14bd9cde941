//! Fixed-step simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per call, no wall-clock time
//! - Stable iteration order (entity lists are kept in creation order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod agent;
pub mod collision;
pub mod obstacle;
pub mod rect;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use agent::{Direction, PatrolAgent};
pub use collision::{Bounded, first_hit, is_stomp, overlapping};
pub use obstacle::{Obstacle, ObstacleKind};
pub use rect::Rect;
pub use state::{EndReason, Entity, GameEvent, GamePhase, WorldBounds, WorldState};
pub use tick::{TickInput, tick};
