//! The environment orchestrator and its persisted aggregate.
//!
//! [`Environment`] owns the whole [`EnvironmentState`] and is the only
//! writer. It is driven by [`Environment::observe`], invoked with the
//! clock's current whole minute; each observation performs the ordered
//! checks (bootstrap, weather-elapsed recompute, expiry regeneration, event
//! cadence) against the current aggregate value, so handlers compose rather
//! than clobber one another.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use arcanum_core::Region;

use crate::config::EnvConfig;
use crate::event::{self, EnvironmentEvent, EventLog, EventMode};
use crate::weather::{self, WeatherState};

/// The persisted environment aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentState {
    /// The active terrain region.
    pub region: Region,
    /// Display name used when `region` is [`Region::Custom`].
    pub custom_region_name: String,
    /// The current weather instance.
    pub weather: WeatherState,
    /// The bounded narrative event log.
    pub events: EventLog,
    /// How generated events are surfaced.
    pub event_mode: EventMode,
    /// Whether expired weather regenerates automatically.
    pub auto_weather: bool,
    /// In-fiction minute at which the current weather began; 0 is the unset
    /// sentinel resolved on the next observation.
    pub last_weather_change_timestamp: u64,
}

impl EnvironmentState {
    /// The default aggregate: forest region, freshly generated weather,
    /// suggestion mode, automatic weather on.
    pub fn initial(rng: &mut StdRng) -> Self {
        Self {
            region: Region::Forest,
            custom_region_name: String::new(),
            weather: weather::generate(Region::Forest, rng),
            events: EventLog::new(),
            event_mode: EventMode::Suggestion,
            auto_weather: true,
            last_weather_change_timestamp: 0,
        }
    }
}

/// An event candidate awaiting the game master's accept or dismiss.
///
/// Not part of the persisted aggregate; a frontend that outlives the
/// orchestrator may save it and hand it back via
/// [`Environment::restore_pending`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEvent {
    /// What happens, narratively.
    pub description: String,
    /// The table-facing mechanical consequence.
    pub mechanical_effect: String,
}

/// The environment orchestrator: sole owner and writer of the aggregate.
///
/// The pending suggestion candidate is runtime-only state; it is not part of
/// the persisted aggregate.
pub struct Environment {
    state: EnvironmentState,
    pending: Option<PendingEvent>,
    rng: StdRng,
    config: EnvConfig,
    current_minute: u64,
    last_cadence_bucket: Option<u64>,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("region", &self.state.region)
            .field("weather", &self.state.weather.kind)
            .field("events", &self.state.events.len())
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

impl Environment {
    /// Create an orchestrator over a fresh default aggregate.
    pub fn new(config: EnvConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let state = EnvironmentState::initial(&mut rng);
        Self::with_rng(state, rng, config)
    }

    /// Create an orchestrator over a previously persisted aggregate.
    pub fn from_state(state: EnvironmentState, config: EnvConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(state, rng, config)
    }

    fn with_rng(state: EnvironmentState, rng: StdRng, config: EnvConfig) -> Self {
        Self {
            state,
            pending: None,
            rng,
            config,
            current_minute: 0,
            last_cadence_bucket: None,
        }
    }

    /// The current aggregate.
    pub fn state(&self) -> &EnvironmentState {
        &self.state
    }

    /// Consume the orchestrator and return the aggregate for persistence.
    pub fn into_state(self) -> EnvironmentState {
        self.state
    }

    /// Read-only region query for external consumers (e.g. NPC generation).
    pub fn current_region(&self) -> Region {
        self.state.region
    }

    /// The region's display name: the custom name when set, else the label.
    pub fn region_name(&self) -> &str {
        if self.state.region == Region::Custom && !self.state.custom_region_name.is_empty() {
            &self.state.custom_region_name
        } else {
            self.state.region.label()
        }
    }

    /// The unresolved suggestion candidate, if any.
    pub fn pending(&self) -> Option<&PendingEvent> {
        self.pending.as_ref()
    }

    /// Re-install a candidate a frontend carried across sessions.
    ///
    /// Intended for use before the first [`Environment::observe`] call, so
    /// the restored candidate keeps holding the suggestion slot.
    pub fn restore_pending(&mut self, pending: Option<PendingEvent>) {
        self.pending = pending;
    }

    /// React to an observed clock minute.
    ///
    /// Performs, in order: first-run bootstrap of the weather stamp,
    /// weather-elapsed recompute, expiry regeneration (when auto-weather is
    /// on), and the event-cadence check (at most one attempt per
    /// `cadence_minutes` bucket, only while the clock runs).
    pub fn observe(&mut self, minute: u64, clock_running: bool) {
        self.current_minute = minute;

        if self.state.last_weather_change_timestamp == 0 {
            self.state.last_weather_change_timestamp = minute;
        } else {
            let elapsed = minute.saturating_sub(self.state.last_weather_change_timestamp);
            self.state.weather.elapsed_game_minutes = u32::try_from(elapsed).unwrap_or(u32::MAX);
        }

        if self.state.auto_weather && self.state.weather.is_expired() {
            self.regenerate_weather();
        }

        let bucket = minute / self.config.cadence_minutes;
        if self.last_cadence_bucket != Some(bucket) {
            self.last_cadence_bucket = Some(bucket);
            self.try_cadence_event(clock_running);
        }
    }

    /// Switch region: fresh weather, cleared event log, cleared pending
    /// candidate, and a re-stamped weather change time.
    pub fn change_region(&mut self, region: Region) {
        self.state.region = region;
        self.state.events.clear();
        self.pending = None;
        self.regenerate_weather();
    }

    /// Set the display name for the custom region.
    pub fn set_custom_region_name(&mut self, name: impl Into<String>) {
        self.state.custom_region_name = name.into();
    }

    /// Manually replace the current weather, ignoring the auto-weather flag.
    pub fn reroll_weather(&mut self) {
        self.regenerate_weather();
    }

    /// Set how generated events are surfaced.
    pub fn set_event_mode(&mut self, mode: EventMode) {
        self.state.event_mode = mode;
    }

    /// Enable or disable automatic weather regeneration on expiry.
    pub fn set_auto_weather(&mut self, enabled: bool) {
        self.state.auto_weather = enabled;
    }

    /// Explicitly generate and log an event, bypassing cadence gates.
    ///
    /// Still subject to the region/weather filter: returns `None` when the
    /// current weather triggers nothing in this region.
    pub fn force_event(&mut self) -> Option<&EnvironmentEvent> {
        let spark = event::try_generate(self.state.region, self.state.weather.kind, &mut self.rng)?;
        self.append_event(spark.description, spark.mechanical_effect);
        self.state.events.last()
    }

    /// Log the pending candidate. Returns `false` when none is pending.
    pub fn accept_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(candidate) => {
                self.append_event(&candidate.description, &candidate.mechanical_effect);
                true
            }
            None => false,
        }
    }

    /// Discard the pending candidate without logging. Returns `false` when
    /// none is pending.
    pub fn dismiss_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    fn regenerate_weather(&mut self) {
        self.state.weather = weather::generate(self.state.region, &mut self.rng);
        self.state.last_weather_change_timestamp = self.current_minute;
    }

    fn try_cadence_event(&mut self, clock_running: bool) {
        if !clock_running || self.state.event_mode == EventMode::Manual {
            return;
        }
        // An unresolved suggestion holds the slot; never overwrite it.
        if self.pending.is_some() {
            return;
        }
        let last_event_minute = self.state.events.last().map_or(0, |e| e.timestamp);
        if self.current_minute.saturating_sub(last_event_minute) < self.config.event_spacing_minutes
        {
            return;
        }
        if self.rng.random::<f64>() >= self.config.event_chance {
            return;
        }
        let Some(spark) =
            event::try_generate(self.state.region, self.state.weather.kind, &mut self.rng)
        else {
            return;
        };
        match self.state.event_mode {
            EventMode::Automatic => self.append_event(spark.description, spark.mechanical_effect),
            EventMode::Suggestion => {
                self.pending = Some(PendingEvent {
                    description: spark.description.to_string(),
                    mechanical_effect: spark.mechanical_effect.to_string(),
                });
            }
            EventMode::Manual => {}
        }
    }

    fn append_event(&mut self, description: &str, mechanical_effect: &str) {
        self.state.events.push(EnvironmentEvent::new(
            description,
            mechanical_effect,
            self.current_minute,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MAX_EVENTS;

    /// An orchestrator that always succeeds at eligible cadence attempts,
    /// on a region whose event table matches every weather kind.
    fn always_firing_env() -> Environment {
        let mut env = Environment::new(EnvConfig::default().with_event_chance(1.0));
        env.change_region(Region::Custom);
        env
    }

    #[test]
    fn first_observation_bootstraps_weather_stamp() {
        let mut env = Environment::new(EnvConfig::default());
        assert_eq!(env.state().last_weather_change_timestamp, 0);
        env.observe(95, false);
        assert_eq!(env.state().last_weather_change_timestamp, 95);
        // Bootstrap skips the elapsed recompute for this cycle.
        assert_eq!(env.state().weather.elapsed_game_minutes, 0);
    }

    #[test]
    fn observation_recomputes_weather_elapsed() {
        let mut env = Environment::new(EnvConfig::default());
        env.observe(10, false);
        env.observe(70, false);
        assert_eq!(env.state().weather.elapsed_game_minutes, 60);
    }

    #[test]
    fn expired_weather_regenerates_when_auto() {
        let mut env = Environment::new(EnvConfig::default());
        env.observe(0, false);
        env.observe(1, false);
        let duration = u64::from(env.state().weather.duration_game_minutes);
        env.observe(1 + duration, false);
        let state = env.state();
        assert_eq!(state.weather.elapsed_game_minutes, 0);
        assert_eq!(state.last_weather_change_timestamp, 1 + duration);
    }

    #[test]
    fn expired_weather_persists_without_auto() {
        let mut env = Environment::new(EnvConfig::default());
        env.set_auto_weather(false);
        env.observe(1, false);
        let before = env.state().weather.clone();
        env.observe(1 + u64::from(before.duration_game_minutes) + 600, false);
        let after = &env.state().weather;
        assert_eq!(after.kind, before.kind);
        assert!(after.is_expired());
    }

    #[test]
    fn region_change_resets_weather_and_log() {
        let mut env = always_firing_env();
        env.set_event_mode(EventMode::Automatic);
        for minute in 0..=240 {
            env.observe(minute, true);
        }
        assert!(!env.state().events.is_empty());

        env.observe(300, true);
        env.change_region(Region::Underground);
        let state = env.state();
        assert_eq!(state.region, Region::Underground);
        assert!(state.events.is_empty());
        assert_eq!(state.weather.elapsed_game_minutes, 0);
        assert_eq!(state.last_weather_change_timestamp, 300);
        assert!(env.pending().is_none());
    }

    #[test]
    fn reroll_replaces_weather_even_without_auto() {
        let mut env = Environment::new(EnvConfig::default());
        env.set_auto_weather(false);
        env.observe(500, false);
        env.reroll_weather();
        assert_eq!(env.state().weather.elapsed_game_minutes, 0);
        assert_eq!(env.state().last_weather_change_timestamp, 500);
    }

    #[test]
    fn automatic_events_respect_minimum_spacing() {
        let mut env = always_firing_env();
        env.set_event_mode(EventMode::Automatic);
        for minute in 0..=1440 {
            env.observe(minute, true);
        }
        let events = env.state().events.entries();
        assert!(!events.is_empty());
        assert!(events.windows(2).all(|w| w[1].timestamp - w[0].timestamp >= 120));
        // Nothing may land before the spacing window has first elapsed.
        assert!(events[0].timestamp >= 120);
    }

    #[test]
    fn no_events_while_clock_paused() {
        let mut env = always_firing_env();
        env.set_event_mode(EventMode::Automatic);
        for minute in 0..=1440 {
            env.observe(minute, false);
        }
        assert!(env.state().events.is_empty());
    }

    #[test]
    fn no_automatic_events_in_manual_mode() {
        let mut env = always_firing_env();
        env.set_event_mode(EventMode::Manual);
        for minute in 0..=1440 {
            env.observe(minute, true);
        }
        assert!(env.state().events.is_empty());
        assert!(env.pending().is_none());
    }

    #[test]
    fn suggestion_mode_holds_a_single_pending_candidate() {
        let mut env = always_firing_env();
        for minute in 0..=240 {
            env.observe(minute, true);
        }
        let first = env.pending().cloned().unwrap();
        assert!(env.state().events.is_empty());

        // Further eligible attempts must not overwrite the candidate.
        for minute in 241..=1440 {
            env.observe(minute, true);
        }
        assert_eq!(env.pending().unwrap(), &first);
    }

    #[test]
    fn accept_logs_pending_at_current_minute() {
        let mut env = always_firing_env();
        for minute in 0..=240 {
            env.observe(minute, true);
        }
        let pending = env.pending().cloned().unwrap();
        env.observe(400, true);
        assert!(env.accept_pending());
        let logged = env.state().events.last().unwrap();
        assert_eq!(logged.description, pending.description);
        assert_eq!(logged.timestamp, 400);
        assert!(env.pending().is_none());
        assert!(!env.accept_pending());
    }

    #[test]
    fn dismiss_discards_without_logging() {
        let mut env = always_firing_env();
        for minute in 0..=240 {
            env.observe(minute, true);
        }
        assert!(env.pending().is_some());
        assert!(env.dismiss_pending());
        assert!(env.state().events.is_empty());
        assert!(!env.dismiss_pending());
    }

    #[test]
    fn force_event_ignores_cadence_but_not_filter() {
        let mut env = Environment::new(EnvConfig::default());
        env.change_region(Region::Custom);
        env.set_event_mode(EventMode::Manual);
        env.observe(5, false);
        // Two forced events back to back, well inside the spacing window.
        assert!(env.force_event().is_some());
        assert!(env.force_event().is_some());
        assert_eq!(env.state().events.len(), 2);

        // Underground never triggers on clear skies: absence, not an error.
        env.change_region(Region::Underground);
        env.state.weather.kind = crate::weather::WeatherKind::Clear;
        assert!(env.force_event().is_none());
    }

    #[test]
    fn event_log_is_bounded() {
        let mut env = Environment::new(EnvConfig::default());
        env.change_region(Region::Custom);
        env.observe(50, false);
        for _ in 0..(MAX_EVENTS + 5) {
            env.force_event();
        }
        assert_eq!(env.state().events.len(), MAX_EVENTS);
    }

    #[test]
    fn cadence_attempts_are_bucketed() {
        // With chance 1.0 and minute-by-minute observation, events land
        // exactly at each spacing boundary that coincides with a bucket
        // change, never closer than the window allows.
        let mut env = always_firing_env();
        env.set_event_mode(EventMode::Automatic);
        for minute in 0..=600 {
            env.observe(minute, true);
        }
        let stamps: Vec<u64> = env.state().events.entries().iter().map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![120, 240, 360, 480, 600]);
    }

    #[test]
    fn state_serde_round_trip() {
        let mut env = always_firing_env();
        env.set_custom_region_name("The Shifting Vale");
        for minute in 0..=240 {
            env.observe(minute, true);
        }
        env.accept_pending();
        let state = env.into_state();
        let json = serde_json::to_string(&state).unwrap();
        let back: EnvironmentState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn from_state_resumes_aggregate() {
        let mut env = Environment::new(EnvConfig::default());
        env.observe(10, false);
        env.set_event_mode(EventMode::Automatic);
        let saved = env.into_state();

        let resumed = Environment::from_state(saved.clone(), EnvConfig::default());
        assert_eq!(resumed.state(), &saved);
        assert_eq!(resumed.current_region(), saved.region);
    }

    #[test]
    fn region_name_prefers_custom_label() {
        let mut env = Environment::new(EnvConfig::default());
        assert_eq!(env.region_name(), "Forest");
        env.change_region(Region::Custom);
        assert_eq!(env.region_name(), "Custom");
        env.set_custom_region_name("Ashen Reach");
        assert_eq!(env.region_name(), "Ashen Reach");
    }
}
