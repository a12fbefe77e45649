//! The virtual clock mapping real time to in-fiction minutes.
//!
//! The clock advances `60 / (ratio * 60)` game minutes per elapsed real
//! second while running, where `ratio` is real minutes per in-fiction hour.
//! The wall-clock instant of the last update is retained so a session that
//! was not being ticked (process exited, table on a break) catches up on
//! resume instead of silently losing time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use arcanum_core::GameTime;

/// Lower bound for the real-minutes-per-game-hour ratio.
pub const MIN_RATIO: f64 = 0.1;

/// Tracks elapsed in-fiction minutes against the wall clock.
///
/// `last_tick_timestamp` is epoch milliseconds; 0 is the unset sentinel used
/// by a freshly created or reset clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    ratio: f64,
    running: bool,
    elapsed_game_minutes: f64,
    last_tick_timestamp: i64,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            running: false,
            elapsed_game_minutes: 0.0,
            last_tick_timestamp: 0,
        }
    }
}

impl GameClock {
    /// Create a stopped clock at minute zero with a 1:1-hour ratio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Real minutes per in-fiction hour.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Whether the clock is currently advancing.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Total elapsed in-fiction minutes, fractional.
    pub fn elapsed_game_minutes(&self) -> f64 {
        self.elapsed_game_minutes
    }

    /// Set the ratio, clamped to at least [`MIN_RATIO`].
    pub fn set_ratio(&mut self, ratio: f64) {
        self.ratio = ratio.max(MIN_RATIO);
    }

    /// Advance by the real time elapsed since the last update.
    ///
    /// Does nothing while paused. The first tick after starting only stamps
    /// the timestamp.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if !self.running {
            return;
        }
        let now_ms = now.timestamp_millis();
        if self.last_tick_timestamp > 0 {
            let real_seconds = (now_ms - self.last_tick_timestamp).max(0) as f64 / 1000.0;
            self.elapsed_game_minutes += real_seconds * (60.0 / (self.ratio * 60.0));
        }
        self.last_tick_timestamp = now_ms;
    }

    /// Catch up on real time that passed while the clock was not being
    /// observed (e.g. across a process restart).
    ///
    /// Only applies when the clock was left running with a stamped
    /// timestamp; the gained game minutes are
    /// `(real_minutes_elapsed / ratio) * 60`.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if !self.running || self.last_tick_timestamp == 0 {
            return;
        }
        let now_ms = now.timestamp_millis();
        let real_minutes = (now_ms - self.last_tick_timestamp).max(0) as f64 / 60_000.0;
        self.elapsed_game_minutes += (real_minutes / self.ratio) * 60.0;
        self.last_tick_timestamp = now_ms;
    }

    /// Flip between running and paused, stamping the timestamp.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.running = !self.running;
        self.last_tick_timestamp = now.timestamp_millis();
    }

    /// Stop the clock and zero elapsed time and timestamp.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_game_minutes = 0.0;
        self.last_tick_timestamp = 0;
    }

    /// Manually fast-forward by a number of game minutes, running or not.
    ///
    /// Negative input is clamped to zero; elapsed time never decreases.
    pub fn skip(&mut self, minutes: f64) {
        self.elapsed_game_minutes += minutes.max(0.0);
    }

    /// The current whole in-fiction minute.
    pub fn current_minute(&self) -> u64 {
        self.elapsed_game_minutes.floor() as u64
    }

    /// The current in-fiction instant.
    pub fn time(&self) -> GameTime {
        GameTime(self.current_minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at_ms(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn new_clock_is_stopped_at_zero() {
        let clock = GameClock::new();
        assert!(!clock.running());
        assert_eq!(clock.elapsed_game_minutes(), 0.0);
        assert_eq!(clock.current_minute(), 0);
    }

    #[test]
    fn tick_advances_one_game_minute_per_real_second_at_ratio_one() {
        let mut clock = GameClock::new();
        clock.toggle(at_ms(10_000));
        clock.tick(at_ms(11_000));
        assert!((clock.elapsed_game_minutes() - 1.0).abs() < 1e-9);
        clock.tick(at_ms(71_000));
        assert!((clock.elapsed_game_minutes() - 61.0).abs() < 1e-9);
    }

    #[test]
    fn tick_scales_with_ratio() {
        let mut clock = GameClock::new();
        clock.set_ratio(2.0);
        clock.toggle(at_ms(0));
        clock.tick(at_ms(1_000));
        // 2 real minutes per game hour: one real second is half a game minute.
        assert!((clock.elapsed_game_minutes() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn tick_while_paused_is_inert() {
        let mut clock = GameClock::new();
        clock.tick(at_ms(5_000));
        clock.tick(at_ms(500_000));
        assert_eq!(clock.elapsed_game_minutes(), 0.0);
    }

    #[test]
    fn resume_catches_up_missed_time() {
        let now = 1_000_000_000;
        let mut clock = GameClock::new();
        clock.toggle(at_ms(now - 120_000));
        clock.resume(at_ms(now));
        // 2 real minutes at 1 real minute per game hour: 120 game minutes.
        assert!((clock.elapsed_game_minutes() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn resume_is_inert_when_paused_or_unstamped() {
        let mut clock = GameClock::new();
        clock.resume(at_ms(1_000_000));
        assert_eq!(clock.elapsed_game_minutes(), 0.0);

        let mut clock = GameClock::new();
        clock.toggle(at_ms(1_000));
        clock.toggle(at_ms(2_000));
        let before = clock.elapsed_game_minutes();
        clock.resume(at_ms(900_000));
        assert_eq!(clock.elapsed_game_minutes(), before);
    }

    #[test]
    fn skip_applies_regardless_of_running_state() {
        let mut clock = GameClock::new();
        clock.skip(1440.0);
        assert!((clock.elapsed_game_minutes() - 1440.0).abs() < 1e-9);

        clock.toggle(at_ms(0));
        clock.skip(1440.0);
        assert!((clock.elapsed_game_minutes() - 2880.0).abs() < 1e-9);
    }

    #[test]
    fn skip_clamps_negative_input() {
        let mut clock = GameClock::new();
        clock.skip(60.0);
        clock.skip(-500.0);
        assert!((clock.elapsed_game_minutes() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn reset_stops_and_zeroes() {
        let mut clock = GameClock::new();
        clock.toggle(at_ms(1_000));
        clock.tick(at_ms(90_000));
        clock.reset();
        assert!(!clock.running());
        assert_eq!(clock.elapsed_game_minutes(), 0.0);
        // A reset clock does not catch up from its cleared timestamp.
        clock.resume(at_ms(500_000));
        assert_eq!(clock.elapsed_game_minutes(), 0.0);
    }

    #[test]
    fn ratio_clamped_to_minimum() {
        let mut clock = GameClock::new();
        clock.set_ratio(0.0);
        assert!((clock.ratio() - MIN_RATIO).abs() < 1e-9);
        clock.set_ratio(-3.0);
        assert!((clock.ratio() - MIN_RATIO).abs() < 1e-9);
        clock.set_ratio(f64::NAN);
        assert!((clock.ratio() - MIN_RATIO).abs() < 1e-9);
    }

    #[test]
    fn backwards_wall_clock_does_not_rewind() {
        let mut clock = GameClock::new();
        clock.toggle(at_ms(100_000));
        clock.tick(at_ms(160_000));
        let before = clock.elapsed_game_minutes();
        clock.tick(at_ms(50_000));
        assert!(clock.elapsed_game_minutes() >= before);
    }

    #[test]
    fn serde_round_trip() {
        let mut clock = GameClock::new();
        clock.set_ratio(2.5);
        clock.toggle(at_ms(42_000));
        clock.tick(at_ms(60_000));
        let json = serde_json::to_string(&clock).unwrap();
        let back: GameClock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, clock);
    }

    proptest! {
        #[test]
        fn elapsed_minutes_never_decrease(ops in proptest::collection::vec((0u8..4, 0i64..1_000_000_000), 1..64)) {
            let mut clock = GameClock::new();
            let mut previous = 0.0f64;
            for (op, value) in ops {
                match op {
                    0 => clock.tick(at_ms(value)),
                    1 => clock.resume(at_ms(value)),
                    2 => clock.skip(value as f64 - 500.0),
                    _ => clock.toggle(at_ms(value)),
                }
                prop_assert!(clock.elapsed_game_minutes() >= previous);
                previous = clock.elapsed_game_minutes();
            }
        }
    }
}
