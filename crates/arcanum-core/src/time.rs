//! In-fiction time derived from elapsed game minutes.
//!
//! The clock in the environment crate accumulates fractional game minutes;
//! everything user-facing works from the floored total via [`GameTime`].

use serde::{Deserialize, Serialize};

/// Minutes in one in-fiction day.
pub const MINUTES_PER_DAY: u64 = 1440;

/// A point in in-fiction time, as whole minutes since the campaign began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameTime(pub u64);

impl GameTime {
    /// Day index since the campaign began (day 0 is the first day).
    pub fn day(self) -> u64 {
        self.0 / MINUTES_PER_DAY
    }

    /// Hour of the day (0-23).
    pub fn hour(self) -> u64 {
        (self.0 % MINUTES_PER_DAY) / 60
    }

    /// Minute of the hour (0-59).
    pub fn minute(self) -> u64 {
        self.0 % 60
    }

    /// The narrative time-of-day bucket for this instant.
    pub fn time_of_day(self) -> TimeOfDay {
        match self.hour() {
            6..12 => TimeOfDay::Morning,
            12..18 => TimeOfDay::Afternoon,
            18..21 => TimeOfDay::Dusk,
            _ => TimeOfDay::DeepNight,
        }
    }
}

impl std::fmt::Display for GameTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.day() > 0 {
            write!(f, "Day {}, ", self.day() + 1)?;
        }
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Narrative buckets of the in-fiction day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 06:00 to 12:00.
    Morning,
    /// 12:00 to 18:00.
    Afternoon,
    /// 18:00 to 21:00.
    Dusk,
    /// 21:00 to 06:00, wrapping past midnight.
    DeepNight,
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Dusk => "Dusk",
            TimeOfDay::DeepNight => "Deep Night",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_hour_minute_decomposition() {
        let t = GameTime(MINUTES_PER_DAY + 6 * 60 + 30);
        assert_eq!(t.day(), 1);
        assert_eq!(t.hour(), 6);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn time_of_day_buckets() {
        assert_eq!(GameTime(6 * 60).time_of_day(), TimeOfDay::Morning);
        assert_eq!(GameTime(11 * 60 + 59).time_of_day(), TimeOfDay::Morning);
        assert_eq!(GameTime(12 * 60).time_of_day(), TimeOfDay::Afternoon);
        assert_eq!(GameTime(18 * 60).time_of_day(), TimeOfDay::Dusk);
        assert_eq!(GameTime(21 * 60).time_of_day(), TimeOfDay::DeepNight);
        assert_eq!(GameTime(3 * 60).time_of_day(), TimeOfDay::DeepNight);
    }

    #[test]
    fn time_of_day_wraps_across_days() {
        let late = GameTime(2 * MINUTES_PER_DAY + 22 * 60);
        assert_eq!(late.time_of_day(), TimeOfDay::DeepNight);
    }

    #[test]
    fn display_omits_day_on_first_day() {
        assert_eq!(GameTime(8 * 60 + 5).to_string(), "08:05");
        assert_eq!(
            GameTime(MINUTES_PER_DAY + 8 * 60 + 5).to_string(),
            "Day 2, 08:05"
        );
    }
}
