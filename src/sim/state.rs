//! World state and core simulation types
//!
//! Everything a tick reads or writes lives in [`WorldState`]; there are no globals.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::agent::PatrolAgent;
use super::collision::Bounded;
use super::obstacle::Obstacle;
use super::rect::Rect;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Fixed extent of the simulated area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Loop state. There is no way back from `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    Terminated,
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Window closed or Escape pressed
    Quit,
    /// Touched an agent without stomping it
    Caught { agent_id: u32 },
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed { obstacle_id: u32 },
    Stomped { agent_id: u32 },
    Caught { agent_id: u32 },
    Quit,
}

/// Borrowed view of any entity, for rendering and queries
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Actor(&'a Actor),
    Obstacle(&'a Obstacle),
    Agent(&'a PatrolAgent),
}

impl Bounded for Actor {
    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Bounded for Obstacle {
    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Bounded for PatrolAgent {
    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Bounded for Entity<'_> {
    fn rect(&self) -> Rect {
        match self {
            Entity::Actor(actor) => actor.rect(),
            Entity::Obstacle(obstacle) => obstacle.rect(),
            Entity::Agent(agent) => agent.rect(),
        }
    }
}

/// Complete world state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub bounds: WorldBounds,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Set when `phase` becomes `Terminated`
    pub end_reason: Option<EndReason>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub actor: Actor,
    /// Static obstacles in creation order
    pub obstacles: Vec<Obstacle>,
    /// Live agents in creation order
    pub agents: Vec<PatrolAgent>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl WorldState {
    /// A world containing only the actor (standing on the floor at x = 100)
    pub fn empty(bounds: WorldBounds, tuning: Tuning) -> Self {
        let actor = Actor::new(100.0, bounds.height - tuning.actor_height, &tuning);
        Self {
            bounds,
            tuning,
            phase: GamePhase::Running,
            end_reason: None,
            time_ticks: 0,
            actor,
            obstacles: Vec::new(),
            agents: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// The stock level
    pub fn new(settings: &Settings) -> Self {
        let bounds = WorldBounds::new(settings.world_width, settings.world_height);
        let mut state = Self::empty(bounds, settings.tuning.clone());
        let (w, h) = (bounds.width, bounds.height);

        state.actor = Actor::new(100.0, h - 100.0, &state.tuning);

        // Ground, then three floating platforms
        state.add_obstacle(|id| Obstacle::platform(id, 0.0, h - 40.0, w, 40.0));
        state.add_obstacle(|id| Obstacle::platform(id, 300.0, 400.0, 200.0, 20.0));
        state.add_obstacle(|id| Obstacle::platform(id, 100.0, 300.0, 200.0, 20.0));
        state.add_obstacle(|id| Obstacle::platform(id, 500.0, 200.0, 200.0, 20.0));

        state.add_obstacle(|id| Obstacle::pipe(id, 600.0, h - 140.0));
        state.add_obstacle(|id| Obstacle::brick(id, 360.0, 250.0));

        let speed = state.tuning.agent_speed;
        state.add_agent(|id| PatrolAgent::new(id, 400.0, h - 70.0, speed));
        state.add_agent(|id| PatrolAgent::new(id, 200.0, h - 70.0, speed));

        log::debug!(
            "World {}x{}: {} obstacles, {} agents",
            w,
            h,
            state.obstacles.len(),
            state.agents.len()
        );
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an obstacle built from a fresh ID; returns the ID
    pub fn add_obstacle(&mut self, build: impl FnOnce(u32) -> Obstacle) -> u32 {
        let id = self.next_entity_id();
        self.obstacles.push(build(id));
        id
    }

    /// Append an agent built from a fresh ID; returns the ID
    pub fn add_agent(&mut self, build: impl FnOnce(u32) -> PatrolAgent) -> u32 {
        let id = self.next_entity_id();
        self.agents.push(build(id));
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Stop the loop. Only the first reason is kept.
    pub fn terminate(&mut self, reason: EndReason) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Terminated;
            self.end_reason = Some(reason);
        }
    }

    /// Every entity in draw order: obstacles, agents, then the actor on top
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        self.obstacles
            .iter()
            .map(Entity::Obstacle)
            .chain(self.agents.iter().map(Entity::Agent))
            .chain(std::iter::once(Entity::Actor(&self.actor)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::ObstacleKind;

    #[test]
    fn test_stock_level() {
        let state = WorldState::new(&Settings::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.obstacles.len(), 6);
        assert_eq!(state.agents.len(), 2);
        assert_eq!(state.obstacles[0].rect, Rect::new(0.0, 560.0, 800.0, 40.0));
        assert_eq!(state.obstacles[4].kind, ObstacleKind::Pipe);
        assert_eq!(state.obstacles[4].rect, Rect::new(600.0, 460.0, 50.0, 100.0));
        assert_eq!(state.actor.rect, Rect::new(100.0, 500.0, 30.0, 60.0));
        // Agents walk on the ground, not in it
        for agent in &state.agents {
            assert_eq!(agent.rect.bottom(), 560.0);
        }
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let state = WorldState::new(&Settings::default());
        let ids: Vec<u32> = state
            .obstacles
            .iter()
            .map(|o| o.id)
            .chain(state.agents.iter().map(|a| a.id))
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_entities_draw_order() {
        let state = WorldState::new(&Settings::default());
        let entities: Vec<_> = state.entities().collect();
        assert_eq!(entities.len(), 9);
        assert!(matches!(entities[0], Entity::Obstacle(_)));
        assert!(matches!(entities[6], Entity::Agent(_)));
        assert!(matches!(entities[8], Entity::Actor(_)));
        assert_eq!(entities[8].rect(), state.actor.rect);
    }

    #[test]
    fn test_terminate_keeps_first_reason() {
        let mut state = WorldState::empty(WorldBounds::new(800.0, 600.0), Tuning::default());
        state.terminate(EndReason::Caught { agent_id: 7 });
        state.terminate(EndReason::Quit);
        assert_eq!(state.phase, GamePhase::Terminated);
        assert_eq!(state.end_reason, Some(EndReason::Caught { agent_id: 7 }));
    }
}
