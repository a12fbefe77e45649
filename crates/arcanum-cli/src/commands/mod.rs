//! CLI command implementations over a persisted session.

pub mod clock;
pub mod events;
pub mod region;
pub mod status;
pub mod weather;

use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use rand::Rng;

use arcanum_core::StateStore;
use arcanum_environment::{
    EnvConfig, Environment, EnvironmentState, GameClock, PendingEvent, WeatherState,
};

/// Store key for the clock state.
const TIMER_KEY: &str = "timer";
/// Store key for the environment aggregate.
const ENVIRONMENT_KEY: &str = "environment";
/// Store key for the frontend-held pending suggestion.
const PENDING_KEY: &str = "pending";

/// A loaded session: clock plus environment, backed by a state directory.
///
/// Loading applies the clock's catch-up for time that passed since the last
/// invocation, restores any saved pending suggestion, and performs one
/// orchestrator observation of the current minute. Missing or corrupt state
/// falls back to defaults.
pub struct Session {
    store: StateStore,
    /// The in-fiction clock.
    pub clock: GameClock,
    /// The environment orchestrator.
    pub env: Environment,
}

impl Session {
    /// Load a session from `dir`, creating default state on first use.
    ///
    /// Without an explicit seed, generation draws from OS entropy.
    pub fn load(dir: &Path, seed: Option<u64>) -> Result<Self, String> {
        let store = StateStore::open(dir).map_err(|e| e.to_string())?;

        let mut clock: GameClock = store.load(TIMER_KEY).unwrap_or_default();
        clock.resume(Utc::now());

        let config = EnvConfig::default().with_seed(seed.unwrap_or_else(|| rand::rng().random()));
        let mut env = match store.load::<EnvironmentState>(ENVIRONMENT_KEY) {
            Some(state) => Environment::from_state(state, config),
            None => Environment::new(config),
        };
        env.restore_pending(store.load::<Option<PendingEvent>>(PENDING_KEY).flatten());
        env.observe(clock.current_minute(), clock.running());

        Ok(Self { store, clock, env })
    }

    /// Re-run the orchestrator against the clock's current minute.
    pub fn observe(&mut self) {
        self.env
            .observe(self.clock.current_minute(), self.clock.running());
    }

    /// Persist the clock, environment aggregate, and pending suggestion.
    pub fn save(&self) -> Result<(), String> {
        self.store
            .save(TIMER_KEY, &self.clock)
            .map_err(|e| e.to_string())?;
        self.store
            .save(ENVIRONMENT_KEY, self.env.state())
            .map_err(|e| e.to_string())?;
        self.store
            .save(PENDING_KEY, &self.env.pending())
            .map_err(|e| e.to_string())
    }
}

/// Print a one-weather summary block: kind, intensity, remaining time, and
/// mechanical effects.
pub fn print_weather(weather: &WeatherState) {
    let remaining = weather.remaining_minutes();
    println!(
        "  {} {} {}",
        weather.kind.to_string().bold(),
        format!("({})", weather.intensity).dimmed(),
        format!("— {} remaining", format_minutes(remaining)).dimmed()
    );
    for effect in &weather.effects {
        println!("    - {effect}");
    }
}

/// Format a span of game minutes as "Nh Mmin".
pub fn format_minutes(minutes: u32) -> String {
    format!("{}h {}min", minutes / 60, minutes % 60)
}
