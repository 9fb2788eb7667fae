//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the crate, providing a single source of truth for constant values.

/// Settings file location
pub mod config {
    /// Directory under the user's config dir that holds our files
    pub const APP_DIR: &str = "clock-overlay";

    /// Settings file name
    pub const FILENAME: &str = "settings.json";
}

/// Timer intervals for the driver loop
pub mod timing {
    use std::time::Duration;

    /// Clock redraw interval. Sub-second only so the displayed minute flips
    /// promptly, not for sub-second display.
    pub const CLOCK_TICK: Duration = Duration::from_millis(200);

    /// Cadence for re-requesting topmost placement while in Above Taskbar
    /// mode. The taskbar and full-screen apps periodically reclaim the top
    /// stacking slot, so setting the flag once is not enough.
    pub const TOPMOST_REASSERT: Duration = Duration::from_millis(500);
}

/// Fixed drop-shadow parameters for the text effects
pub mod effects {
    /// Blur radius of the Shadow effect
    pub const SHADOW_BLUR: f64 = 4.0;

    /// Opacity of the Shadow effect
    pub const SHADOW_OPACITY: f64 = 0.7;

    /// Blur radius of the Glow effect
    pub const GLOW_BLUR: f64 = 8.0;

    /// Opacity of the Glow effect
    pub const GLOW_OPACITY: f64 = 0.9;
}

/// Derived layout quantities
pub mod layout {
    /// The AM/PM indicator renders at this fraction of the main font size
    pub const MERIDIEM_SCALE: f64 = 0.6;
}

/// Window position handling
pub mod position {
    /// Sentinel meaning "no saved coordinate, let the OS place the window"
    pub const UNSET: f64 = -1.0;
}
