//! Fixed timestep simulation tick
//!
//! Advances one session deterministically: player step, obstacle sweep with
//! hit detection, coin collection.

use super::collision::cells_overlap;
use super::state::{GamePhase, GameState};

/// Input sampled for a single tick (deterministic)
///
/// Each axis is the difference of an opposed key pair (right minus left,
/// down minus up), so the value is always -1, 0 or 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal intent: -1 left, 1 right
    pub dx: i32,
    /// Vertical intent: -1 up, 1 down
    pub dy: i32,
}

/// Advance the session by one fixed timestep.
///
/// Frozen in `GameOver`; the shell swaps in a fresh [`GameState`] to restart.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    state.player.step(input.dx, input.dy);

    // Obstacles sweep before the coin check; a hit on this tick still lets a
    // simultaneous coin pickup count, matching the sequential frame order.
    for obstacle in &mut state.obstacles {
        obstacle.step(&mut state.rng);
        if cells_overlap(state.player.pos, obstacle.pos) {
            state.phase = GamePhase::GameOver;
        }
    }

    if cells_overlap(state.player.pos, state.coin.pos) {
        state.player.score += 1;
        state.place_coin_clear();
    }
}
