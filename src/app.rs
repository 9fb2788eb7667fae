//! Application root
//!
//! [`ClockApp`] owns the one live settings model and runs every control
//! change through the same cycle: mutate the model, recompute and apply the
//! whole presentation, persist best-effort. The async driver loop multiplexes
//! the two periodic timers and the control channel on a single thread, so the
//! model is never mutated concurrently and no locking is needed.

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info};

use crate::clock::ClockText;
use crate::config::{ClockSettings, SettingsStore, TextEffect, TopMostMode};
use crate::constants::timing;
use crate::enforcer::TopmostEnforcer;
use crate::presentation::Presentation;
use crate::surface::WindowSurface;

/// Commands from the embedding UI/tray layer.
///
/// Color values arrive as hex strings the picker already validated; the
/// reconciler still falls back to defaults if one slips through invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlCommand {
    SetTopMostMode(TopMostMode),
    SetUse24Hour(bool),
    SetOpacity(f64),
    SetFontSize(f64),
    SetFontColor(String),
    SetFontFamily(String),
    SetTextEffect(TextEffect),
    SetHasBackground(bool),
    SetBackgroundColor(String),
    SetBackgroundPadding { x: f64, y: f64 },
    Reset,
    Shutdown,
}

/// The application root: settings model, store, enforcer, and the window
/// surface, wired into one mutate → reconcile → persist cycle.
pub struct ClockApp<S: WindowSurface> {
    settings: ClockSettings,
    store: SettingsStore,
    enforcer: TopmostEnforcer,
    surface: S,
}

impl<S: WindowSurface> ClockApp<S> {
    /// Load settings, restore the saved window position if one exists, and
    /// bring the surface fully in line with the model, including an
    /// immediate first clock update.
    pub fn new(store: SettingsStore, surface: S) -> Self {
        let settings = store.load();
        let mut app = Self {
            settings,
            store,
            enforcer: TopmostEnforcer::new(),
            surface,
        };
        if app.settings.has_saved_position() {
            app.surface
                .set_position(app.settings.window_left, app.settings.window_top);
        }
        app.reconcile();
        app.update_clock();
        app
    }

    pub fn settings(&self) -> &ClockSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_enforcing_topmost(&self) -> bool {
        self.enforcer.is_enforcing()
    }

    /// Recompute the whole presentation from the model and apply it, then
    /// align topmost enforcement with the selected mode.
    fn reconcile(&mut self) {
        let presentation = Presentation::compute_lossy(&self.settings);
        presentation.apply_to(&mut self.surface);
        self.enforcer.sync(self.settings.top_most_mode);
    }

    /// Best-effort persistence: a failed save is logged and dropped, the
    /// in-memory model stays authoritative for the running session.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.settings) {
            error!(error = %e, "Failed to persist settings");
        }
    }

    fn mutate(&mut self, change: impl FnOnce(&mut ClockSettings)) {
        change(&mut self.settings);
        self.reconcile();
        self.persist();
    }

    pub fn set_top_most_mode(&mut self, mode: TopMostMode) {
        self.mutate(|s| s.top_most_mode = mode);
    }

    pub fn set_use_24_hour(&mut self, use_24_hour: bool) {
        self.mutate(|s| s.use_24_hour = use_24_hour);
        // Refresh the text right away instead of waiting out the tick
        self.update_clock();
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.mutate(|s| s.opacity = opacity);
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.mutate(|s| s.font_size = size);
    }

    pub fn set_font_color(&mut self, color: String) {
        self.mutate(|s| s.font_color = color);
    }

    pub fn set_font_family(&mut self, family: String) {
        self.mutate(|s| s.font_family = family);
    }

    pub fn set_text_effect(&mut self, effect: TextEffect) {
        self.mutate(|s| s.text_effect = effect);
    }

    pub fn set_has_background(&mut self, has_background: bool) {
        self.mutate(|s| s.has_background = has_background);
    }

    pub fn set_background_color(&mut self, color: String) {
        self.mutate(|s| s.background_color = color);
    }

    pub fn set_background_padding(&mut self, x: f64, y: f64) {
        self.mutate(|s| {
            s.background_padding_x = x;
            s.background_padding_y = y;
        });
    }

    /// Replace the whole model with defaults. A full replacement, never a
    /// field-wise merge, and immediately persisted.
    pub fn reset(&mut self) {
        info!("Resetting settings to defaults");
        self.settings = ClockSettings::default();
        self.reconcile();
        self.persist();
    }

    /// Capture the live window position into the model. Called once,
    /// immediately before shutdown.
    pub fn capture_window_position(&mut self) {
        let (x, y) = self.surface.position();
        self.settings.window_left = x;
        self.settings.window_top = y;
    }

    fn update_clock(&mut self) {
        let text = ClockText::now(self.settings.use_24_hour);
        self.surface.set_text(&text.time, &text.meridiem);
        self.surface.auto_size_to_content();
    }

    fn shutdown(&mut self) {
        self.capture_window_position();
        self.persist();
        info!("Clock core shut down");
    }

    /// Apply one control command. Returns false when the loop should stop.
    pub fn handle_command(&mut self, command: ControlCommand) -> bool {
        match command {
            ControlCommand::SetTopMostMode(mode) => self.set_top_most_mode(mode),
            ControlCommand::SetUse24Hour(use_24_hour) => self.set_use_24_hour(use_24_hour),
            ControlCommand::SetOpacity(opacity) => self.set_opacity(opacity),
            ControlCommand::SetFontSize(size) => self.set_font_size(size),
            ControlCommand::SetFontColor(color) => self.set_font_color(color),
            ControlCommand::SetFontFamily(family) => self.set_font_family(family),
            ControlCommand::SetTextEffect(effect) => self.set_text_effect(effect),
            ControlCommand::SetHasBackground(has) => self.set_has_background(has),
            ControlCommand::SetBackgroundColor(color) => self.set_background_color(color),
            ControlCommand::SetBackgroundPadding { x, y } => self.set_background_padding(x, y),
            ControlCommand::Reset => self.reset(),
            ControlCommand::Shutdown => {
                self.shutdown();
                return false;
            }
        }
        true
    }

    /// Drive the core until a Shutdown command arrives or the control
    /// channel closes. Intended for a current-thread runtime; ticks
    /// interleave only at await points, never preempting one another.
    ///
    /// Returns the surface so the embedding layer can tear the window down.
    pub async fn run(mut self, mut commands: mpsc::Receiver<ControlCommand>) -> S {
        let mut clock_tick = interval(timing::CLOCK_TICK);
        let mut reassert = interval(timing::TOPMOST_REASSERT);
        clock_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        reassert.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // Control changes take priority over cosmetic ticks
                biased;

                command = commands.recv() => {
                    let command = command.unwrap_or(ControlCommand::Shutdown);
                    info!(command = ?command, "Received control command");
                    if !self.handle_command(command) {
                        break;
                    }
                }
                _ = reassert.tick(), if self.enforcer.is_enforcing() => {
                    self.enforcer.tick(&mut self.surface);
                }
                _ = clock_tick.tick() => {
                    self.update_clock();
                }
            }
        }

        self.surface
    }
}
