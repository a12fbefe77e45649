//! Environment simulation engine for the Arcanum game-master toolkit.
//!
//! A stateful model of the campaign's surroundings: a virtual clock advances
//! in-fiction time at a configurable real-time ratio, weather transitions
//! probabilistically per [`arcanum_core::Region`], and narrative events
//! surface in step with weather and elapsed time. The [`Environment`]
//! orchestrator owns the persisted aggregate and is driven by observed
//! clock minutes; the generators underneath it are pure functions over an
//! injected randomness source, so every behavior is reproducible under a
//! fixed seed.

/// The virtual clock mapping real time to in-fiction minutes.
pub mod clock;
/// Configuration for the environment engine.
pub mod config;
/// Mechanical effect lookup per weather kind and intensity.
pub mod effects;
/// The environment orchestrator and its persisted aggregate.
pub mod environment;
/// Narrative events, the bounded event log, and region event tables.
pub mod event;
/// Weather kinds, regional probability tables, and generation.
pub mod weather;

/// Re-export of [`clock::GameClock`].
pub use clock::GameClock;
/// Re-export of [`config::EnvConfig`].
pub use config::EnvConfig;
/// Re-exports of [`environment::Environment`], [`environment::EnvironmentState`],
/// and [`environment::PendingEvent`].
pub use environment::{Environment, EnvironmentState, PendingEvent};
/// Re-exports of [`event::EnvironmentEvent`], [`event::EventLog`], and [`event::EventMode`].
pub use event::{EnvironmentEvent, EventLog, EventMode};
/// Re-exports of [`weather::Intensity`], [`weather::WeatherKind`], and [`weather::WeatherState`].
pub use weather::{Intensity, WeatherKind, WeatherState};
