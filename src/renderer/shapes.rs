//! Shape generation for 2D primitives

use glam::IVec2;

use super::vertex::{Vertex, colors};
use crate::consts::CELL_SIZE;
use crate::sim::GameState;

/// Generate vertices for a filled cell-sized square at a grid position
pub fn cell_square(pos: IVec2, color: [f32; 4]) -> [Vertex; 6] {
    let x0 = pos.x as f32;
    let y0 = pos.y as f32;
    let x1 = x0 + CELL_SIZE as f32;
    let y1 = y0 + CELL_SIZE as f32;

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Build the vertex list for one frame of the session.
///
/// The player is emitted last so it stays visible on the tick it is hit.
/// Obstacles straddling the board edge are clipped by the viewport.
pub fn frame_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((2 + state.obstacles.len()) * 6);

    vertices.extend(cell_square(state.coin.pos, colors::COIN));
    for obstacle in &state.obstacles {
        vertices.extend(cell_square(obstacle.pos, colors::OBSTACLE));
    }
    vertices.extend(cell_square(state.player.pos, colors::PLAYER));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::OBSTACLE_COUNT;
    use crate::sim::GameState;

    #[test]
    fn test_cell_square_spans_one_cell() {
        let quad = cell_square(IVec2::new(40, 60), colors::PLAYER);
        let xs: Vec<f32> = quad.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = quad.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), 40.0);
        assert_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 60.0);
        assert_eq!(ys.iter().cloned().fold(f32::INFINITY, f32::min), 60.0);
        assert_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 80.0);
    }

    #[test]
    fn test_frame_has_one_quad_per_entity() {
        let state = GameState::new(11);
        let vertices = frame_vertices(&state);
        assert_eq!(vertices.len(), (2 + OBSTACLE_COUNT) * 6);
        // Player quad is last
        let last = &vertices[vertices.len() - 6..];
        assert!(last.iter().all(|v| v.color == colors::PLAYER));
    }
}
