//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in the [`GameState`] aggregate;
//! the host owns exactly one and passes it to `tick`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start menu is showing, nothing ticks
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended; final score is frozen
    GameOver,
}

/// Difficulty mode, chosen from the start menu.
///
/// Only gates the crushing log: whether it chases at all, and how fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Terrain type of one lane (a full row at a fixed z)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneKind {
    Grass,
    Road,
    River,
}

/// Static obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Tree,
    Rock,
    /// The only safe tile on a river lane; does not block movement
    Lilypad,
}

impl ObstacleKind {
    #[inline]
    pub fn blocks_movement(&self) -> bool {
        !matches!(self, ObstacleKind::Lilypad)
    }
}

/// A static obstacle occupying one grid cell
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub x: i32,
    pub z: i32,
    pub kind: ObstacleKind,
}

/// A collectible coin; `active` flips to false exactly once, on pickup
#[derive(Debug, Clone, Copy)]
pub struct Coin {
    pub x: i32,
    pub z: i32,
    pub active: bool,
}

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Shield,
    SpeedBoost,
    TimeFreeze,
}

/// A collectible power-up; same one-shot lifecycle as [`Coin`]
#[derive(Debug, Clone, Copy)]
pub struct PowerUp {
    pub x: i32,
    pub z: i32,
    pub active: bool,
    pub kind: PowerUpKind,
}

/// A vehicle on a road lane. `x` is continuous (sub-cell, grid units) and
/// wraps at the world boundary; `z` and `speed` are fixed at creation.
#[derive(Debug, Clone, Copy)]
pub struct Vehicle {
    pub x: f32,
    pub z: i32,
    /// Signed: positive on even lanes, negative on odd lanes
    pub speed: f32,
    /// Cosmetic model/color selector
    pub color_index: usize,
}

/// An in-flight hop between two grid cells
#[derive(Debug, Clone, Copy)]
pub struct Hop {
    pub start_x: f32,
    pub start_z: f32,
    pub start_angle: f32,
    pub elapsed: u32,
    pub duration: u32,
}

/// Player movement state: only `Idle` accepts new input
#[derive(Debug, Clone, Copy)]
pub enum MoveState {
    Idle,
    Hopping(Hop),
}

/// The player character.
///
/// `target_*` is the committed grid cell (updated at move commit, used for
/// camera follow and spawn-window culling), `current_*` the continuously
/// interpolated position used for rendering and collision.
#[derive(Debug, Clone)]
pub struct Player {
    pub target_x: i32,
    pub target_z: i32,
    pub current_x: f32,
    pub current_z: f32,
    pub angle: f32,
    pub target_angle: f32,
    pub move_state: MoveState,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            target_x: 0,
            target_z: 0,
            current_x: 0.0,
            current_z: 0.0,
            angle: 0.0,
            target_angle: 0.0,
            move_state: MoveState::Idle,
        }
    }
}

impl Player {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.move_state, MoveState::Idle)
    }

    /// Player position in world space along z
    #[inline]
    pub fn world_z(&self) -> f32 {
        self.current_z * LANE_STEP
    }

    /// Current hop altitude (half-sine arc, zero when idle)
    pub fn hop_y(&self) -> f32 {
        match self.move_state {
            MoveState::Idle => 0.0,
            MoveState::Hopping(hop) => {
                let t = hop.elapsed as f32 / hop.duration as f32;
                (t * std::f32::consts::PI).sin() * HOP_HEIGHT
            }
        }
    }
}

/// The crushing log chasing the player from the +z side
#[derive(Debug, Clone, Copy)]
pub struct CrushLog {
    /// Leading edge, world units
    pub z: f32,
    /// Advance speed toward -z, world units per second
    pub speed: f32,
    /// Disabled entirely on easy mode
    pub active: bool,
}

impl CrushLog {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let (active, speed) = match difficulty {
            Difficulty::Easy => (false, LOG_SPEED_NORMAL),
            Difficulty::Normal => (true, LOG_SPEED_NORMAL),
            Difficulty::Hard => (true, LOG_SPEED_HARD),
        };
        Self {
            z: LOG_START_Z,
            speed,
            active,
        }
    }
}

/// Active power-up effects. Concurrent effects are allowed; re-triggering
/// a timed effect resets its window rather than stacking.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveEffects {
    /// No automatic expiry; consumed by death mitigation
    pub shield: bool,
    pub boost_ticks: u32,
    pub freeze_ticks: u32,
}

impl ActiveEffects {
    #[inline]
    pub fn time_frozen(&self) -> bool {
        self.freeze_ticks > 0
    }

    #[inline]
    pub fn speed_boosted(&self) -> bool {
        self.boost_ticks > 0
    }
}

/// Transient power-up banner. At most one is visible; a new activation
/// replaces it and restarts the fade timer.
#[derive(Debug, Clone, Copy)]
pub struct Notification {
    pub kind: PowerUpKind,
    pub ticks_left: u32,
}

impl Notification {
    /// Ticks of fade-out at the end of the display window
    pub const FADE_TAIL_TICKS: u32 = 30;

    /// Banner opacity: full for the whole display window, then a quick
    /// fade just before it clears
    pub fn opacity(&self) -> f32 {
        if self.ticks_left >= Self::FADE_TAIL_TICKS {
            1.0
        } else {
            self.ticks_left as f32 / Self::FADE_TAIL_TICKS as f32
        }
    }
}

/// Death classification: instakill bypasses shield mitigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathSeverity {
    /// Crushing log only: always ends the game
    Instakill,
    /// Vehicles and drowning: a shield absorbs it
    Normal,
}

/// Effects emitted by `tick` for the host to act on (HUD, notifications)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected { score: u32 },
    HeroUnlocked,
    PowerUpActivated { kind: PowerUpKind },
    ShieldSaved,
    GameOver { score: u32 },
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducible world generation
    pub seed: u64,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub score: u32,
    /// Set once when the score threshold is crossed
    pub hero_unlocked: bool,
    pub player: Player,
    /// Lane terrain keyed by z; immutable after generation
    pub lanes: BTreeMap<i32, LaneKind>,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    pub vehicles: Vec<Vehicle>,
    pub log: CrushLog,
    pub effects: ActiveEffects,
    /// Pending drowning countdown, scheduled at move commit
    pub drown_ticks: Option<u32>,
    pub notification: Option<Notification>,
    /// Day/night phase, radians in [0, 2π)
    pub sky_phase: f32,
    /// Event buffer drained by `tick`
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session and generate its world
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        let mut state = Self {
            seed,
            difficulty,
            phase: GamePhase::Playing,
            time_ticks: 0,
            score: 0,
            hero_unlocked: false,
            player: Player::default(),
            lanes: BTreeMap::new(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            power_ups: Vec::new(),
            vehicles: Vec::new(),
            log: CrushLog::for_difficulty(difficulty),
            effects: ActiveEffects::default(),
            drown_ticks: None,
            notification: None,
            sky_phase: 0.0,
            events: Vec::new(),
        };
        super::worldgen::generate_world(&mut state);
        state
    }

    /// Lane terrain at z; lanes outside the generated range read as grass
    pub fn lane_kind(&self, z: i32) -> LaneKind {
        self.lanes.get(&z).copied().unwrap_or(LaneKind::Grass)
    }

    /// Whether a movement-blocking obstacle occupies the cell
    pub fn blocking_obstacle_at(&self, x: i32, z: i32) -> bool {
        self.obstacles
            .iter()
            .any(|o| o.x == x && o.z == z && o.kind.blocks_movement())
    }

    /// Whether a lilypad occupies the cell
    pub fn lilypad_at(&self, x: i32, z: i32) -> bool {
        self.obstacles
            .iter()
            .any(|o| o.x == x && o.z == z && o.kind == ObstacleKind::Lilypad)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
