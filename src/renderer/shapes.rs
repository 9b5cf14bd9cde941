//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{Bounded, Entity, ObstacleKind, Rect, WorldBounds, WorldState};

/// Map a world point (top-left origin, y down) to normalized device coordinates
#[inline]
pub fn world_to_ndc(point: Vec2, bounds: &WorldBounds) -> Vec2 {
    Vec2::new(
        point.x / bounds.width * 2.0 - 1.0,
        1.0 - point.y / bounds.height * 2.0,
    )
}

/// Two triangles covering `rect`, already in NDC
pub fn rect_quad(rect: &Rect, bounds: &WorldBounds, color: [f32; 4]) -> [Vertex; 6] {
    let min = world_to_ndc(rect.min(), bounds);
    let max = world_to_ndc(rect.max(), bounds);

    // min is top-left, max is bottom-right
    let tl = Vertex::new(min.x, min.y, color);
    let tr = Vertex::new(max.x, min.y, color);
    let bl = Vertex::new(min.x, max.y, color);
    let br = Vertex::new(max.x, max.y, color);

    [tl, bl, tr, tr, bl, br]
}

/// Fill colour for an entity
pub fn entity_color(entity: &Entity<'_>) -> [f32; 4] {
    match entity {
        Entity::Actor(actor) if actor.crouching => colors::ACTOR_CROUCHED,
        Entity::Actor(_) => colors::ACTOR,
        Entity::Obstacle(obstacle) => match obstacle.kind {
            ObstacleKind::Platform | ObstacleKind::Brick => colors::BROWN,
            ObstacleKind::Pipe => colors::PIPE,
        },
        Entity::Agent(_) => colors::AGENT,
    }
}

/// Vertices for the whole world, in draw order
pub fn world_vertices(state: &WorldState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((state.obstacles.len() + state.agents.len() + 1) * 6);
    for entity in state.entities() {
        vertices.extend_from_slice(&rect_quad(
            &entity.rect(),
            &state.bounds,
            entity_color(&entity),
        ));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    #[test]
    fn test_world_corners_map_to_ndc_corners() {
        let bounds = WorldBounds::new(800.0, 600.0);
        assert_eq!(world_to_ndc(Vec2::ZERO, &bounds), Vec2::new(-1.0, 1.0));
        assert_eq!(
            world_to_ndc(Vec2::new(800.0, 600.0), &bounds),
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(
            world_to_ndc(Vec2::new(400.0, 300.0), &bounds),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_world_vertices_cover_every_entity() {
        let state = WorldState::new(&Settings::default());
        let vertices = world_vertices(&state);
        assert_eq!(vertices.len(), 9 * 6);
        // Actor drawn last
        assert!(vertices[vertices.len() - 6..]
            .iter()
            .all(|v| v.color == colors::ACTOR));
    }

    #[test]
    fn test_entity_colors() {
        let state = WorldState::new(&Settings::default());
        let fills: Vec<_> = state.entities().map(|e| entity_color(&e)).collect();
        assert_eq!(fills[0], colors::BROWN);
        assert_eq!(fills[4], colors::PIPE);
        assert_eq!(fills[6], colors::AGENT);
    }
}
