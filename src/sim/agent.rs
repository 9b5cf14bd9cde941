//! Patrol agents - adversaries walking back and forth between the world bounds

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::WorldBounds;
use crate::consts::AGENT_SIZE;

/// Horizontal walking direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// A patrolling adversary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatrolAgent {
    pub id: u32,
    pub rect: Rect,
    pub direction: Direction,
    /// Pixels per tick
    pub speed: f32,
}

impl PatrolAgent {
    pub fn new(id: u32, x: f32, y: f32, speed: f32) -> Self {
        Self {
            id,
            rect: Rect::new(x, y, AGENT_SIZE, AGENT_SIZE),
            direction: Direction::Right,
            speed,
        }
    }

    /// Advance one tick. Turns around once the rectangle has left the world.
    ///
    /// Both bound checks read the same post-move rectangle and at most one of them
    /// fires, so the direction never flips twice in a tick.
    pub fn update(&mut self, bounds: &WorldBounds) {
        self.rect.x += self.speed * self.direction.sign();

        if self.rect.left() < 0.0 {
            self.direction = Direction::Right;
        } else if self.rect.right() > bounds.width {
            self.direction = Direction::Left;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> WorldBounds {
        WorldBounds::new(800.0, 600.0)
    }

    #[test]
    fn test_walks_right_by_speed() {
        let mut agent = PatrolAgent::new(1, 400.0, 530.0, 2.0);
        agent.update(&bounds());
        assert_eq!(agent.rect.x, 402.0);
        assert_eq!(agent.direction, Direction::Right);
    }

    #[test]
    fn test_turns_at_right_bound() {
        let mut agent = PatrolAgent::new(1, 769.0, 530.0, 2.0);
        agent.update(&bounds());
        // right edge is 801 > 800
        assert_eq!(agent.direction, Direction::Left);
        agent.update(&bounds());
        assert_eq!(agent.rect.x, 769.0);
        assert_eq!(agent.direction, Direction::Left);
    }

    #[test]
    fn test_turns_at_left_bound() {
        let mut agent = PatrolAgent::new(1, 1.0, 530.0, 2.0);
        agent.direction = Direction::Left;
        agent.update(&bounds());
        assert_eq!(agent.rect.x, -1.0);
        assert_eq!(agent.direction, Direction::Right);
    }

    #[test]
    fn test_ignores_vertical_axis() {
        let mut agent = PatrolAgent::new(1, 100.0, 123.0, 2.0);
        for _ in 0..1000 {
            agent.update(&bounds());
            assert_eq!(agent.rect.y, 123.0);
        }
    }

    proptest! {
        #[test]
        fn prop_flips_only_when_out_of_bounds(
            x in -10.0f32..810.0,
            going_left in any::<bool>(),
            speed in 0.5f32..8.0,
        ) {
            let mut agent = PatrolAgent::new(1, x, 530.0, speed);
            agent.direction = if going_left { Direction::Left } else { Direction::Right };
            let before = agent.direction;

            agent.update(&bounds());

            let out_left = agent.rect.left() < 0.0;
            let out_right = agent.rect.right() > 800.0;
            if out_left {
                prop_assert_eq!(agent.direction, Direction::Right);
            } else if out_right {
                prop_assert_eq!(agent.direction, Direction::Left);
            } else {
                prop_assert_eq!(agent.direction, before);
            }
        }
    }
}
