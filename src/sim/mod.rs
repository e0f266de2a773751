//! Deterministic gameplay core
//!
//! No rendering or platform dependencies live here; the host drives the
//! simulation exclusively through [`tick`] at a fixed 120 Hz timestep and
//! reads [`GameState`] to draw.

pub mod hazards;
pub mod movement;
pub mod powerups;
pub mod sky;
pub mod state;
pub mod tick;
pub mod worldgen;

pub use movement::Direction;
pub use state::{
    ActiveEffects, Coin, CrushLog, DeathSeverity, Difficulty, GameEvent, GamePhase, GameState,
    LaneKind, MoveState, Notification, Obstacle, ObstacleKind, Player, PowerUp, PowerUpKind,
    Vehicle,
};
pub use tick::{tick, TickInput};
