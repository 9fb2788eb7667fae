//! Boundary to the window/rendering layer
//!
//! The core never reads presentation state back from the window; it only
//! issues instructions. The single exception is [`WindowSurface::position`],
//! read once at shutdown so the next run can restore placement.

use crate::color::Rgb;
use crate::presentation::TextEffectSpec;

/// Operations the embedding window layer must provide.
pub trait WindowSurface {
    /// Set or clear the OS topmost flag.
    fn set_topmost(&mut self, topmost: bool);

    /// Re-request topmost placement. Called repeatedly in Above Taskbar mode
    /// because the OS keeps demoting the window's stacking order.
    fn reassert_topmost(&mut self);

    fn set_opacity(&mut self, opacity: f64);

    /// Main clock font size plus the smaller size used for the AM/PM text.
    fn set_font_size(&mut self, size: f64, meridiem_size: f64);

    fn set_font_family(&mut self, family: &str);

    fn set_font_color(&mut self, color: Rgb);

    fn set_text_effect(&mut self, effect: &TextEffectSpec);

    /// Show or hide the background panel. The color accompanies the call so
    /// the surface never has to cache one from an earlier instruction.
    fn set_background(&mut self, visible: bool, color: Rgb);

    /// Content padding, applied whether or not the background is visible so
    /// toggling the background does not move the text.
    fn set_padding(&mut self, x: f64, y: f64);

    fn set_text(&mut self, time: &str, meridiem: &str);

    /// Shrink or grow the window to fit the current content.
    fn auto_size_to_content(&mut self);

    /// Current window position (left, top).
    fn position(&self) -> (f64, f64);

    fn set_position(&mut self, x: f64, y: f64);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Everything a surface was told to do, in order.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum SurfaceCall {
        SetTopmost(bool),
        ReassertTopmost,
        SetOpacity(f64),
        SetFontSize { size: f64, meridiem_size: f64 },
        SetFontFamily(String),
        SetFontColor(Rgb),
        SetTextEffect(TextEffectSpec),
        SetBackground { visible: bool, color: Rgb },
        SetPadding { x: f64, y: f64 },
        SetText { time: String, meridiem: String },
        AutoSizeToContent,
        SetPosition(f64, f64),
    }

    /// Records every instruction for assertions. Stands in for the real
    /// window layer in unit tests.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub calls: Vec<SurfaceCall>,
        pub position: (f64, f64),
    }

    impl RecordingSurface {
        pub fn at_position(x: f64, y: f64) -> Self {
            Self {
                calls: Vec::new(),
                position: (x, y),
            }
        }

        pub fn reassert_count(&self) -> usize {
            self.calls
                .iter()
                .filter(|call| **call == SurfaceCall::ReassertTopmost)
                .count()
        }
    }

    impl WindowSurface for RecordingSurface {
        fn set_topmost(&mut self, topmost: bool) {
            self.calls.push(SurfaceCall::SetTopmost(topmost));
        }

        fn reassert_topmost(&mut self) {
            self.calls.push(SurfaceCall::ReassertTopmost);
        }

        fn set_opacity(&mut self, opacity: f64) {
            self.calls.push(SurfaceCall::SetOpacity(opacity));
        }

        fn set_font_size(&mut self, size: f64, meridiem_size: f64) {
            self.calls.push(SurfaceCall::SetFontSize { size, meridiem_size });
        }

        fn set_font_family(&mut self, family: &str) {
            self.calls.push(SurfaceCall::SetFontFamily(family.to_string()));
        }

        fn set_font_color(&mut self, color: Rgb) {
            self.calls.push(SurfaceCall::SetFontColor(color));
        }

        fn set_text_effect(&mut self, effect: &TextEffectSpec) {
            self.calls.push(SurfaceCall::SetTextEffect(effect.clone()));
        }

        fn set_background(&mut self, visible: bool, color: Rgb) {
            self.calls.push(SurfaceCall::SetBackground { visible, color });
        }

        fn set_padding(&mut self, x: f64, y: f64) {
            self.calls.push(SurfaceCall::SetPadding { x, y });
        }

        fn set_text(&mut self, time: &str, meridiem: &str) {
            self.calls.push(SurfaceCall::SetText {
                time: time.to_string(),
                meridiem: meridiem.to_string(),
            });
        }

        fn auto_size_to_content(&mut self) {
            self.calls.push(SurfaceCall::AutoSizeToContent);
        }

        fn position(&self) -> (f64, f64) {
            self.position
        }

        fn set_position(&mut self, x: f64, y: f64) {
            self.position = (x, y);
            self.calls.push(SurfaceCall::SetPosition(x, y));
        }
    }
}
