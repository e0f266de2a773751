//! Player preferences
//!
//! Persisted to LocalStorage as JSON. Only preferences live here; game
//! state itself is never stored.

use serde::{Deserialize, Serialize};

pub use crate::sim::state::Difficulty;

/// Camera behavior. Purely a presentation choice with no gameplay impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CameraMode {
    /// Chase camera behind the player
    #[default]
    Follow,
    /// Fixed-angle overhead view
    Isometric,
}

impl CameraMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraMode::Follow => "Follow",
            CameraMode::Isometric => "Isometric",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            CameraMode::Follow => CameraMode::Isometric,
            CameraMode::Isometric => CameraMode::Follow,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Last difficulty picked from the start menu
    pub difficulty: Difficulty,
    pub camera: CameraMode,
    /// Play as the alternate character (only honored once unlocked)
    pub use_hero: bool,
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "frogway_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
