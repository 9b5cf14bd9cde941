//! Static obstacles: platforms, pipes and bricks

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Obstacle types (only affects size at construction and colour when drawn)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Platform,
    Pipe,
    Brick,
}

/// An immovable rectangle the actor can land on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl Obstacle {
    pub fn platform(id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            kind: ObstacleKind::Platform,
            rect: Rect::new(x, y, width, height),
        }
    }

    pub fn pipe(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            kind: ObstacleKind::Pipe,
            rect: Rect::new(x, y, PIPE_WIDTH, PIPE_HEIGHT),
        }
    }

    pub fn brick(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            kind: ObstacleKind::Brick,
            rect: Rect::new(x, y, BRICK_SIZE, BRICK_SIZE),
        }
    }
}
