//! Presentation reconciliation
//!
//! The entire presentation is recomputed from the settings model on every
//! change rather than patched incrementally, so the window can never drift
//! out of sync with the model no matter how many times or in what order
//! fields were mutated.

use tracing::error;

use crate::color::{ColorParseError, Rgb};
use crate::config::{ClockSettings, TextEffect};
use crate::constants::{effects, layout};
use crate::surface::WindowSurface;

/// Concrete text-effect parameters handed to the window surface.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEffectSpec {
    /// Centered drop shadow (zero offset)
    DropShadow { color: Rgb, blur: f64, opacity: f64 },
    None,
}

/// The full set of apply-instructions derived from one settings snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub topmost: bool,
    pub opacity: f64,
    pub font_size: f64,
    /// 0.6 × font size; only rendered in 12-hour mode
    pub meridiem_font_size: f64,
    pub font_color: Rgb,
    pub font_family: String,
    pub background_visible: bool,
    pub background_color: Rgb,
    pub padding_x: f64,
    pub padding_y: f64,
    pub effect: TextEffectSpec,
}

impl Presentation {
    /// Pure derivation from the model. Fails only when a color string in the
    /// model does not parse, which validated UI paths never produce.
    pub fn compute(settings: &ClockSettings) -> Result<Self, ColorParseError> {
        let font_color = Rgb::parse_hex(&settings.font_color)?;
        let background_color = Rgb::parse_hex(&settings.background_color)?;
        Ok(Self::from_parts(settings, font_color, background_color))
    }

    /// Reconciliation entry point: a color that fails to parse is logged and
    /// replaced with its default instead of aborting the reconciliation.
    pub fn compute_lossy(settings: &ClockSettings) -> Self {
        let font_color = Rgb::parse_hex(&settings.font_color).unwrap_or_else(|e| {
            error!(font_color = %settings.font_color, error = %e, "Invalid font color, using default");
            Rgb::WHITE
        });
        let background_color = Rgb::parse_hex(&settings.background_color).unwrap_or_else(|e| {
            error!(background_color = %settings.background_color, error = %e, "Invalid background color, using default");
            Rgb::BLACK
        });
        Self::from_parts(settings, font_color, background_color)
    }

    // Font color must be parsed before the effect is built: Glow reuses it.
    fn from_parts(settings: &ClockSettings, font_color: Rgb, background_color: Rgb) -> Self {
        let effect = match settings.text_effect {
            TextEffect::Shadow => TextEffectSpec::DropShadow {
                color: Rgb::BLACK,
                blur: effects::SHADOW_BLUR,
                opacity: effects::SHADOW_OPACITY,
            },
            TextEffect::Glow => TextEffectSpec::DropShadow {
                color: font_color,
                blur: effects::GLOW_BLUR,
                opacity: effects::GLOW_OPACITY,
            },
            TextEffect::None => TextEffectSpec::None,
        };

        Self {
            topmost: settings.top_most_mode.is_topmost(),
            opacity: settings.opacity,
            font_size: settings.font_size,
            meridiem_font_size: settings.font_size * layout::MERIDIEM_SCALE,
            font_color,
            font_family: settings.font_family.clone(),
            background_visible: settings.has_background,
            background_color,
            padding_x: settings.background_padding_x,
            padding_y: settings.background_padding_y,
            effect,
        }
    }

    /// Push the instructions to the surface in dependency order, ending with
    /// an auto-size so the window fits the restyled content.
    pub fn apply_to(&self, surface: &mut dyn WindowSurface) {
        surface.set_topmost(self.topmost);
        surface.set_opacity(self.opacity);
        surface.set_font_size(self.font_size, self.meridiem_font_size);
        surface.set_font_color(self.font_color);
        surface.set_font_family(&self.font_family);
        surface.set_background(self.background_visible, self.background_color);
        surface.set_padding(self.padding_x, self.padding_y);
        surface.set_text_effect(&self.effect);
        surface.auto_size_to_content();
    }
}
