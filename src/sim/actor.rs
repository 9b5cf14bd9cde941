//! The player-controlled actor
//!
//! Gravity, walking, jumping and crouching. Collision with obstacles and agents
//! happens afterwards in [`super::tick`]; this module only knows about the world
//! bounds.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::WorldBounds;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub rect: Rect,
    /// Pixels per tick, positive is downward
    pub velocity_y: f32,
    /// Airborne from a jump or fall that hasn't been resolved by ground contact
    pub jumping: bool,
    /// Height is halved while set
    pub crouching: bool,
}

impl Actor {
    /// Standing actor with its top-left corner at (x, y)
    pub fn new(x: f32, y: f32, tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(x, y, tuning.actor_width, tuning.actor_height),
            velocity_y: 0.0,
            jumping: false,
            crouching: false,
        }
    }

    /// Land on a surface whose top edge is at `top`
    pub fn land_on(&mut self, top: f32) {
        self.rect.set_bottom(top);
        self.velocity_y = 0.0;
        self.jumping = false;
    }

    /// Advance one tick. Returns true if a jump was launched.
    ///
    /// The step order matters: gravity and the floor clamp run before input, so a
    /// jump pressed on the tick the actor touches the floor takes effect at once.
    pub fn update(&mut self, input: &TickInput, tuning: &Tuning, bounds: &WorldBounds) -> bool {
        // Gravity
        self.velocity_y += tuning.gravity;
        self.rect.y += self.velocity_y;

        // Floor
        if self.rect.bottom() > bounds.height {
            self.land_on(bounds.height);
        }

        // Walking (both keys cancel out)
        if input.left {
            self.rect.x -= tuning.walk_step;
        }
        if input.right {
            self.rect.x += tuning.walk_step;
        }

        let mut jumped = false;
        if input.jump && !self.jumping {
            self.velocity_y = -tuning.jump_speed;
            self.jumping = true;
            jumped = true;
        }

        self.update_crouch(input.down, tuning);

        if self.rect.left() < 0.0 {
            self.rect.set_left(0.0);
        }
        if self.rect.right() > bounds.width {
            self.rect.set_right(bounds.width);
        }

        jumped
    }

    /// Shrink on the press, restore on the release. Holding changes nothing, and
    /// the bottom edge stays put either way.
    fn update_crouch(&mut self, down: bool, tuning: &Tuning) {
        let delta = tuning.crouch_delta();
        if down && !self.jumping {
            if !self.crouching {
                self.crouching = true;
                self.rect.height = tuning.actor_height - delta;
                self.rect.y += delta;
            }
        } else if self.crouching {
            // Also reached when airborne with the key still held
            self.crouching = false;
            self.rect.height = tuning.actor_height;
            self.rect.y -= delta;
        }
    }
}
