//! Pixel Dash - a grid-based dodge-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Playable board width in pixels
    pub const BOARD_WIDTH: i32 = 800;
    /// Playable board height in pixels
    pub const BOARD_HEIGHT: i32 = 600;
    /// Edge length of every entity square; all positions are multiples of this
    pub const CELL_SIZE: i32 = 20;
    /// Obstacles active at once (fixed for the whole session)
    pub const OBSTACLE_COUNT: usize = 3;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Random draws for a clear coin cell before falling back to a grid scan
    pub const COIN_PLACE_ATTEMPTS: u32 = 32;
}

/// Number of grid-aligned cells that fit fully inside `extent`
///
/// A trailing partial cell is excluded, so with extent 800 and cell 20 the
/// legal origins are `{0, 20, ..., 780}` - 40 cells.
#[inline]
pub fn cell_count(extent: i32) -> i32 {
    (extent - consts::CELL_SIZE) / consts::CELL_SIZE + 1
}
