//! Configuration for the environment engine.

/// Tuning knobs for the environment orchestrator.
///
/// The event-cadence parameters reproduce the toolkit's established pacing:
/// one attempt per 30-minute bucket, at least 120 in-fiction minutes between
/// logged events, 30% success per eligible attempt.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// RNG seed for reproducible weather and event draws.
    pub seed: u64,
    /// Probability that an eligible cadence attempt produces an event.
    pub event_chance: f64,
    /// Minimum in-fiction minutes between logged events.
    pub event_spacing_minutes: u64,
    /// Granularity of cadence checks, in observed game minutes.
    pub cadence_minutes: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            event_chance: 0.3,
            event_spacing_minutes: 120,
            cadence_minutes: 30,
        }
    }
}

impl EnvConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-attempt event probability (clamped to 0.0-1.0).
    pub fn with_event_chance(mut self, chance: f64) -> Self {
        self.event_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the minimum spacing between logged events, in game minutes.
    pub fn with_event_spacing(mut self, minutes: u64) -> Self {
        self.event_spacing_minutes = minutes;
        self
    }
}
