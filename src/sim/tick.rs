//! Fixed-step simulation tick
//!
//! Movement first, then collision resolution in a fixed order: actor against
//! obstacles, then actor against agents.

use super::collision::{first_hit, is_stomp};
use super::state::{EndReason, GameEvent, GamePhase, WorldState};

/// Key states for a single tick, sampled once before the tick runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Space or Up
    pub jump: bool,
    /// Crouch
    pub down: bool,
    /// Window closed / Escape
    pub quit: bool,
}

/// Advance the world by one tick
pub fn tick(state: &mut WorldState, input: &TickInput) {
    state.events.clear();

    if state.phase == GamePhase::Terminated {
        return;
    }

    if input.quit {
        state.events.push(GameEvent::Quit);
        state.terminate(EndReason::Quit);
        return;
    }

    state.time_ticks += 1;

    if state.actor.update(input, &state.tuning, &state.bounds) {
        state.events.push(GameEvent::Jumped);
    }
    for agent in &mut state.agents {
        agent.update(&state.bounds);
    }

    resolve_obstacles(state);
    resolve_agents(state);
}

/// Land the actor on the first obstacle it overlaps. Only while falling, so the
/// actor can jump up through a platform from below.
fn resolve_obstacles(state: &mut WorldState) {
    if state.actor.velocity_y <= 0.0 {
        return;
    }

    if let Some(i) = first_hit(&state.actor.rect, &state.obstacles) {
        let obstacle = &state.obstacles[i];
        state.actor.land_on(obstacle.rect.top());
        state.events.push(GameEvent::Landed {
            obstacle_id: obstacle.id,
        });
    }
}

/// Stomp or be caught by the first agent the actor overlaps. At most one agent is
/// removed per tick even when several overlap.
fn resolve_agents(state: &mut WorldState) {
    let Some(i) = first_hit(&state.actor.rect, &state.agents) else {
        return;
    };

    let actor = &state.actor;
    let agent_id = state.agents[i].id;
    if is_stomp(&actor.rect, actor.velocity_y, &state.agents[i].rect) {
        state.agents.remove(i);
        state.events.push(GameEvent::Stomped { agent_id });
    } else {
        state.events.push(GameEvent::Caught { agent_id });
        state.terminate(EndReason::Caught { agent_id });
    }
}
