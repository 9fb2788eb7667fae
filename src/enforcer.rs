//! Topmost enforcement
//!
//! "Above Taskbar" is not a stable OS window property: the taskbar and
//! full-screen applications periodically reclaim the top stacking slot, so
//! the window has to re-request topmost placement on a fixed cadence.
//! "Always on Top" is honored reliably once set and needs no reassertion.

use tracing::{debug, info};

use crate::config::TopMostMode;
use crate::surface::WindowSurface;

/// Enforcement state, driven entirely by the selected topmost mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnforcerState {
    #[default]
    Idle,
    Enforcing,
}

/// Two-state machine re-asserting topmost placement while in Above Taskbar
/// mode. The driver loop calls [`TopmostEnforcer::tick`] on the reassert
/// interval; all transitions happen synchronously in [`TopmostEnforcer::sync`].
#[derive(Debug, Default)]
pub struct TopmostEnforcer {
    state: EnforcerState,
}

impl TopmostEnforcer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EnforcerState {
        self.state
    }

    /// Enforcing if and only if the mode is Above Taskbar.
    pub fn is_enforcing(&self) -> bool {
        self.state == EnforcerState::Enforcing
    }

    /// Align enforcement with the selected mode.
    pub fn sync(&mut self, mode: TopMostMode) {
        let next = if mode == TopMostMode::AboveTaskbar {
            EnforcerState::Enforcing
        } else {
            EnforcerState::Idle
        };
        if next != self.state {
            info!(mode = mode.as_str(), state = ?next, "Topmost enforcement changed");
            self.state = next;
        }
    }

    /// One enforcement beat. A no-op unless currently Enforcing.
    pub fn tick(&self, surface: &mut dyn WindowSurface) {
        if self.is_enforcing() {
            debug!("Reasserting topmost placement");
            surface.reassert_topmost();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::RecordingSurface;

    const ALL_MODES: [TopMostMode; 3] = [
        TopMostMode::Normal,
        TopMostMode::AlwaysOnTop,
        TopMostMode::AboveTaskbar,
    ];

    #[test]
    fn test_starts_idle() {
        assert_eq!(TopmostEnforcer::new().state(), EnforcerState::Idle);
    }

    #[test]
    fn test_enforcing_iff_above_taskbar_for_all_transitions() {
        for from in ALL_MODES {
            for to in ALL_MODES {
                let mut enforcer = TopmostEnforcer::new();
                enforcer.sync(from);
                enforcer.sync(to);
                assert_eq!(
                    enforcer.is_enforcing(),
                    to == TopMostMode::AboveTaskbar,
                    "transition {from:?} -> {to:?}"
                );
            }
        }
    }

    #[test]
    fn test_tick_reasserts_only_while_enforcing() {
        let mut surface = RecordingSurface::default();
        let mut enforcer = TopmostEnforcer::new();

        enforcer.tick(&mut surface);
        assert_eq!(surface.reassert_count(), 0);

        enforcer.sync(TopMostMode::AboveTaskbar);
        enforcer.tick(&mut surface);
        enforcer.tick(&mut surface);
        assert_eq!(surface.reassert_count(), 2);

        enforcer.sync(TopMostMode::AlwaysOnTop);
        enforcer.tick(&mut surface);
        assert_eq!(surface.reassert_count(), 2);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut enforcer = TopmostEnforcer::new();
        enforcer.sync(TopMostMode::AboveTaskbar);
        enforcer.sync(TopMostMode::AboveTaskbar);
        assert!(enforcer.is_enforcing());

        enforcer.sync(TopMostMode::Normal);
        enforcer.sync(TopMostMode::Normal);
        assert!(!enforcer.is_enforcing());
    }
}
