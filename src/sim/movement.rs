//! Discrete-grid movement state machine
//!
//! Moves commit instantly at the grid level; the hop animation interpolates
//! the rendered position afterwards. All interaction side effects (drowning
//! schedule, coin and power-up pickup) happen at commit time against the
//! destination cell.

use std::f32::consts::PI;

use crate::consts::*;
use crate::sim::powerups;
use crate::sim::state::{GameEvent, GameState, Hop, LaneKind, MoveState};
use crate::{lerp, normalize_angle};

/// One of the four grid directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid delta (dx, dz); forward is -z
    #[inline]
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Model facing angle around the y axis
    #[inline]
    pub fn facing_angle(&self) -> f32 {
        match self {
            Direction::Up => PI / 2.0,
            Direction::Down => -PI / 2.0,
            Direction::Left => PI,
            Direction::Right => 0.0,
        }
    }
}

/// Attempt a move. Ignored unless the player is idle; rejected silently at
/// the grid boundary or into a blocking obstacle.
pub fn try_move(state: &mut GameState, direction: Direction) {
    if !state.player.is_idle() {
        return;
    }

    let (dx, dz) = direction.delta();
    let new_x = state.player.target_x + dx;
    let new_z = state.player.target_z + dz;

    // Only x is bounded; z past the generated range reads as open grass
    if !(GRID_MIN_X..=GRID_MAX_X).contains(&new_x) {
        return;
    }
    if state.blocking_obstacle_at(new_x, new_z) {
        return;
    }

    let target_angle = direction.facing_angle();
    // Rotate the short way around even across the -π/π seam
    let mut start_angle = normalize_angle(state.player.angle);
    if target_angle - start_angle > PI {
        start_angle += 2.0 * PI;
    } else if target_angle - start_angle < -PI {
        start_angle -= 2.0 * PI;
    }

    let duration = if state.effects.speed_boosted() {
        BOOSTED_MOVE_DURATION_TICKS
    } else {
        MOVE_DURATION_TICKS
    };

    state.player.move_state = MoveState::Hopping(Hop {
        start_x: state.player.current_x,
        start_z: state.player.current_z,
        start_angle,
        elapsed: 0,
        duration,
    });
    state.player.target_x = new_x;
    state.player.target_z = new_z;
    state.player.target_angle = target_angle;

    land_on(state, new_x, new_z);
}

/// Commit-time cell interactions for the destination cell
fn land_on(state: &mut GameState, x: i32, z: i32) {
    if state.lane_kind(z) == LaneKind::River && !state.lilypad_at(x, z) {
        state.drown_ticks = Some(DROWN_DELAY_TICKS);
    }

    if let Some(coin) = state
        .coins
        .iter_mut()
        .find(|c| c.active && c.x == x && c.z == z)
    {
        coin.active = false;
        state.score += COIN_SCORE;
        let score = state.score;
        state.push_event(GameEvent::CoinCollected { score });
        if score >= HERO_UNLOCK_SCORE && !state.hero_unlocked {
            state.hero_unlocked = true;
            state.push_event(GameEvent::HeroUnlocked);
            log::info!("hero character unlocked at score {score}");
        }
    }

    if let Some(power_up) = state
        .power_ups
        .iter_mut()
        .find(|p| p.active && p.x == x && p.z == z)
    {
        power_up.active = false;
        let kind = power_up.kind;
        powerups::activate(state, kind);
    }
}

/// Advance the hop interpolation by one tick
pub fn advance_hop(state: &mut GameState) {
    let MoveState::Hopping(mut hop) = state.player.move_state else {
        return;
    };
    hop.elapsed += 1;
    let t = hop.elapsed as f32 / hop.duration as f32;

    if t >= 1.0 {
        state.player.current_x = state.player.target_x as f32;
        state.player.current_z = state.player.target_z as f32;
        state.player.angle = normalize_angle(state.player.target_angle);
        state.player.move_state = MoveState::Idle;
    } else {
        state.player.current_x = lerp(hop.start_x, state.player.target_x as f32, t);
        state.player.current_z = lerp(hop.start_z, state.player.target_z as f32, t);
        state.player.angle = lerp(hop.start_angle, state.player.target_angle, t);
        state.player.move_state = MoveState::Hopping(hop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Coin, Difficulty, Obstacle, ObstacleKind};

    /// Fresh session stripped to bare grass, for forced scenarios
    fn grass_world() -> GameState {
        let mut state = GameState::new(1, Difficulty::Easy);
        for kind in state.lanes.values_mut() {
            *kind = LaneKind::Grass;
        }
        state.obstacles.clear();
        state.coins.clear();
        state.power_ups.clear();
        state.vehicles.clear();
        state
    }

    fn finish_hop(state: &mut GameState) {
        for _ in 0..MOVE_DURATION_TICKS {
            advance_hop(state);
        }
        assert!(state.player.is_idle());
    }

    #[test]
    fn four_hops_forward_reach_lane_minus_four() {
        let mut state = grass_world();
        for _ in 0..4 {
            try_move(&mut state, Direction::Up);
            finish_hop(&mut state);
        }
        assert_eq!(state.player.target_z, -4);
        assert_eq!(state.player.current_z, -4.0);
    }

    #[test]
    fn input_ignored_mid_hop() {
        let mut state = grass_world();
        try_move(&mut state, Direction::Up);
        advance_hop(&mut state);
        try_move(&mut state, Direction::Left);
        assert_eq!(state.player.target_x, 0);
        assert_eq!(state.player.target_z, -1);
    }

    #[test]
    fn boundary_move_is_a_no_op() {
        let mut state = grass_world();
        state.player.target_x = GRID_MIN_X;
        state.player.current_x = GRID_MIN_X as f32;
        try_move(&mut state, Direction::Left);
        assert!(state.player.is_idle());
        assert_eq!(state.player.target_x, GRID_MIN_X);
    }

    #[test]
    fn play_continues_past_the_generated_range() {
        let mut state = grass_world();
        state.player.target_z = GEN_MIN_Z;
        state.player.current_z = GEN_MIN_Z as f32;
        try_move(&mut state, Direction::Up);
        assert_eq!(state.player.target_z, GEN_MIN_Z - 1);
        // Ungenerated lanes read as grass, so no drowning is scheduled
        assert!(state.drown_ticks.is_none());

        let mut state = grass_world();
        state.player.target_z = GEN_MAX_Z;
        state.player.current_z = GEN_MAX_Z as f32;
        try_move(&mut state, Direction::Down);
        assert_eq!(state.player.target_z, GEN_MAX_Z + 1);
    }

    #[test]
    fn blocking_obstacle_rejects_move() {
        let mut state = grass_world();
        state.obstacles.push(Obstacle {
            x: 0,
            z: -1,
            kind: ObstacleKind::Tree,
        });
        try_move(&mut state, Direction::Up);
        assert!(state.player.is_idle());
        assert_eq!(state.player.target_z, 0);
    }

    #[test]
    fn lilypad_is_passable() {
        let mut state = grass_world();
        state.lanes.insert(-1, LaneKind::River);
        state.obstacles.push(Obstacle {
            x: 0,
            z: -1,
            kind: ObstacleKind::Lilypad,
        });
        try_move(&mut state, Direction::Up);
        assert_eq!(state.player.target_z, -1);
        assert!(state.drown_ticks.is_none());
    }

    #[test]
    fn open_water_schedules_drowning() {
        let mut state = grass_world();
        state.lanes.insert(-1, LaneKind::River);
        try_move(&mut state, Direction::Up);
        assert_eq!(state.drown_ticks, Some(DROWN_DELAY_TICKS));
    }

    #[test]
    fn coin_pickup_scores_and_deactivates() {
        let mut state = grass_world();
        state.coins.push(Coin {
            x: 0,
            z: -1,
            active: true,
        });
        try_move(&mut state, Direction::Up);
        assert_eq!(state.score, COIN_SCORE);
        assert!(!state.coins[0].active);
        assert!(state
            .events
            .contains(&GameEvent::CoinCollected { score: COIN_SCORE }));
    }

    #[test]
    fn hero_unlocks_exactly_once_at_threshold() {
        let mut state = grass_world();
        state.score = HERO_UNLOCK_SCORE - COIN_SCORE;
        state.coins.push(Coin {
            x: 0,
            z: -1,
            active: true,
        });
        state.coins.push(Coin {
            x: 0,
            z: -2,
            active: true,
        });
        try_move(&mut state, Direction::Up);
        finish_hop(&mut state);
        assert!(state.hero_unlocked);
        try_move(&mut state, Direction::Up);
        finish_hop(&mut state);
        let unlocks = state
            .events
            .iter()
            .filter(|e| **e == GameEvent::HeroUnlocked)
            .count();
        assert_eq!(unlocks, 1);
    }

    #[test]
    fn boosted_hop_uses_short_duration() {
        let mut state = grass_world();
        state.effects.boost_ticks = 100;
        try_move(&mut state, Direction::Up);
        match state.player.move_state {
            MoveState::Hopping(hop) => assert_eq!(hop.duration, BOOSTED_MOVE_DURATION_TICKS),
            MoveState::Idle => panic!("expected hop in flight"),
        }
    }

    #[test]
    fn rotation_takes_shortest_path_across_seam() {
        let mut state = grass_world();
        state.player.angle = PI; // facing left
        try_move(&mut state, Direction::Down); // target -π/2
        let MoveState::Hopping(hop) = state.player.move_state else {
            panic!("expected hop in flight");
        };
        // normalize_angle maps π to -π, so the sweep is the 90° one
        assert!((state.player.target_angle - hop.start_angle).abs() <= PI + 1e-6);
    }

    #[test]
    fn hop_arc_peaks_at_midpoint() {
        let mut state = grass_world();
        try_move(&mut state, Direction::Up);
        for _ in 0..MOVE_DURATION_TICKS / 2 {
            advance_hop(&mut state);
        }
        assert!((state.player.hop_y() - HOP_HEIGHT).abs() < 0.02);
        finish_hop(&mut state);
        assert_eq!(state.player.hop_y(), 0.0);
    }
}
