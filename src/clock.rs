//! Clock text production
//!
//! Stateless: every tick derives the displayed strings from the current
//! local time and the 12/24-hour preference, nothing is carried between
//! ticks.

use chrono::{Local, Timelike};

/// The rendered clock strings for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockText {
    /// `HH:MM` in 24-hour mode, `H:MM` without a leading zero in 12-hour mode
    pub time: String,
    /// `"AM"`/`"PM"` in 12-hour mode, empty in 24-hour mode
    pub meridiem: String,
}

impl ClockText {
    /// Format an instant per the 12/24-hour preference.
    pub fn render(at: &impl Timelike, use_24_hour: bool) -> Self {
        if use_24_hour {
            Self {
                time: format!("{:02}:{:02}", at.hour(), at.minute()),
                meridiem: String::new(),
            }
        } else {
            let (is_pm, hour) = at.hour12();
            Self {
                time: format!("{}:{:02}", hour, at.minute()),
                meridiem: if is_pm { "PM" } else { "AM" }.to_string(),
            }
        }
    }

    /// Render the current wall-clock time.
    pub fn now(use_24_hour: bool) -> Self {
        Self::render(&Local::now().time(), use_24_hour)
    }
}
