//! Power-up effect scheduler
//!
//! Effects run concurrently. Picking up an already-active timed effect
//! resets its window to full rather than stacking; the shield is a flag
//! consumed by death mitigation and never expires on its own.

use crate::consts::*;
use crate::sim::state::{GameEvent, GameState, Notification, PowerUpKind};

impl PowerUpKind {
    /// Banner text shown by the host while the notification is live
    pub fn banner_text(&self) -> &'static str {
        match self {
            PowerUpKind::Shield => "SHIELD ACTIVE",
            PowerUpKind::SpeedBoost => "SPEED BOOST",
            PowerUpKind::TimeFreeze => "TIME FREEZE",
        }
    }

    /// Banner accent color as a CSS string
    pub fn banner_color(&self) -> &'static str {
        match self {
            PowerUpKind::Shield => "#44aaff",
            PowerUpKind::SpeedBoost => "#ffcc00",
            PowerUpKind::TimeFreeze => "#88eeff",
        }
    }
}

/// Apply a picked-up power-up and (re)start its banner
pub fn activate(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Shield => state.effects.shield = true,
        PowerUpKind::SpeedBoost => state.effects.boost_ticks = SPEED_BOOST_TICKS,
        PowerUpKind::TimeFreeze => state.effects.freeze_ticks = TIME_FREEZE_TICKS,
    }
    // A new pickup replaces any banner still showing
    state.notification = Some(Notification {
        kind,
        ticks_left: NOTIFICATION_TICKS,
    });
    state.push_event(GameEvent::PowerUpActivated { kind });
    log::info!("power-up activated: {:?}", kind);
}

/// Count down timed effects and the notification banner by one tick
pub fn decay(state: &mut GameState) {
    state.effects.boost_ticks = state.effects.boost_ticks.saturating_sub(1);
    state.effects.freeze_ticks = state.effects.freeze_ticks.saturating_sub(1);

    if let Some(notification) = &mut state.notification {
        notification.ticks_left -= 1;
        if notification.ticks_left == 0 {
            state.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Difficulty;

    fn session() -> GameState {
        GameState::new(3, Difficulty::Normal)
    }

    #[test]
    fn boost_resets_instead_of_stacking() {
        let mut state = session();
        activate(&mut state, PowerUpKind::SpeedBoost);
        for _ in 0..100 {
            decay(&mut state);
        }
        activate(&mut state, PowerUpKind::SpeedBoost);
        assert_eq!(state.effects.boost_ticks, SPEED_BOOST_TICKS);
    }

    #[test]
    fn second_shield_is_idempotent() {
        let mut state = session();
        activate(&mut state, PowerUpKind::Shield);
        activate(&mut state, PowerUpKind::Shield);
        assert!(state.effects.shield);
        decay(&mut state);
        assert!(state.effects.shield, "shield must not decay");
    }

    #[test]
    fn effects_run_concurrently() {
        let mut state = session();
        activate(&mut state, PowerUpKind::Shield);
        activate(&mut state, PowerUpKind::SpeedBoost);
        activate(&mut state, PowerUpKind::TimeFreeze);
        assert!(state.effects.shield);
        assert!(state.effects.speed_boosted());
        assert!(state.effects.time_frozen());
    }

    #[test]
    fn freeze_expires_after_window() {
        let mut state = session();
        activate(&mut state, PowerUpKind::TimeFreeze);
        for _ in 0..TIME_FREEZE_TICKS {
            decay(&mut state);
        }
        assert!(!state.effects.time_frozen());
    }

    #[test]
    fn new_banner_replaces_and_restarts_fade() {
        let mut state = session();
        activate(&mut state, PowerUpKind::SpeedBoost);
        for _ in 0..NOTIFICATION_TICKS / 2 {
            decay(&mut state);
        }
        activate(&mut state, PowerUpKind::TimeFreeze);
        let n = state.notification.as_ref().unwrap();
        assert_eq!(n.kind, PowerUpKind::TimeFreeze);
        assert_eq!(n.ticks_left, NOTIFICATION_TICKS);
    }

    #[test]
    fn banner_holds_full_opacity_until_the_tail() {
        let mut state = session();
        activate(&mut state, PowerUpKind::SpeedBoost);
        for _ in 0..(NOTIFICATION_TICKS - Notification::FADE_TAIL_TICKS) {
            assert_eq!(state.notification.as_ref().unwrap().opacity(), 1.0);
            decay(&mut state);
        }
        // Inside the tail the banner fades toward zero
        for _ in 0..Notification::FADE_TAIL_TICKS - 1 {
            decay(&mut state);
            let n = state.notification.as_ref().unwrap();
            assert!(n.opacity() < 1.0);
        }
    }

    #[test]
    fn banner_clears_after_display_window() {
        let mut state = session();
        activate(&mut state, PowerUpKind::Shield);
        for _ in 0..NOTIFICATION_TICKS {
            decay(&mut state);
        }
        assert!(state.notification.is_none());
    }
}
