//! Clock settings model
//!
//! The single mutable record of everything the user can configure. Field
//! names serialize in PascalCase and the enums as their display strings
//! ("Always on Top", "Shadow", ...) so settings files written by earlier
//! releases keep deserializing unchanged.
//!
//! Missing fields fill in per-field defaults on load; the model is never
//! partially populated.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::position;

/// Window stacking behavior.
///
/// Always on Top relies on the OS honoring the topmost flag once set.
/// Above Taskbar additionally re-requests topmost placement on a timer
/// because the taskbar and full-screen apps keep demoting the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopMostMode {
    Normal,
    #[default]
    AlwaysOnTop,
    AboveTaskbar,
}

impl TopMostMode {
    /// Display string, also the value stored in the settings file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopMostMode::Normal => "Normal",
            TopMostMode::AlwaysOnTop => "Always on Top",
            TopMostMode::AboveTaskbar => "Above Taskbar",
        }
    }

    /// Lenient decode: an unrecognized string (hand-edited config) resolves
    /// to Normal rather than failing the whole document.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Always on Top" => TopMostMode::AlwaysOnTop,
            "Above Taskbar" => TopMostMode::AboveTaskbar,
            _ => TopMostMode::Normal,
        }
    }

    /// Whether this mode keeps the window above normal windows at all.
    pub fn is_topmost(&self) -> bool {
        !matches!(self, TopMostMode::Normal)
    }
}

impl Serialize for TopMostMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TopMostMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(TopMostMode::from_name(&name))
    }
}

/// Text effect applied to the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEffect {
    #[default]
    Shadow,
    Glow,
    None,
}

impl TextEffect {
    /// Display string, also the value stored in the settings file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEffect::Shadow => "Shadow",
            TextEffect::Glow => "Glow",
            TextEffect::None => "None",
        }
    }

    /// Lenient decode: unrecognized strings resolve to Shadow.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Glow" => TextEffect::Glow,
            "None" => TextEffect::None,
            _ => TextEffect::Shadow,
        }
    }
}

impl Serialize for TextEffect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TextEffect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(TextEffect::from_name(&name))
    }
}

/// Every configurable option, fully populated at all times.
///
/// Exactly one instance is live per process, owned by the application root.
/// Reset replaces the whole record with [`ClockSettings::default`], never a
/// field-wise merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClockSettings {
    // General
    pub top_most_mode: TopMostMode,
    pub use_24_hour: bool,
    /// Window alpha in [0.0, 1.0]; the UI slider clamps the range
    pub opacity: f64,

    // Position & size
    /// Saved window coordinates; -1 means "not set yet"
    #[serde(rename = "Left")]
    pub window_left: f64,
    #[serde(rename = "Top")]
    pub window_top: f64,
    pub font_size: f64,

    // Appearance
    pub font_color: String,
    pub font_family: String,
    pub text_effect: TextEffect,

    // Background
    pub has_background: bool,
    pub background_color: String,
    pub background_padding_x: f64,
    pub background_padding_y: f64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            top_most_mode: TopMostMode::AlwaysOnTop,
            use_24_hour: false,
            opacity: 1.0,
            window_left: position::UNSET,
            window_top: position::UNSET,
            font_size: 60.0,
            font_color: "#FFFFFF".to_string(),
            font_family: "Segoe UI Variable Display".to_string(),
            text_effect: TextEffect::Shadow,
            has_background: false,
            background_color: "#000000".to_string(),
            background_padding_x: 10.0,
            background_padding_y: 5.0,
        }
    }
}

impl ClockSettings {
    /// True when a previous run saved both window coordinates.
    pub fn has_saved_position(&self) -> bool {
        self.window_left != position::UNSET && self.window_top != position::UNSET
    }
}
