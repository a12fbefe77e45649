//! Weather kinds, regional probability tables, and generation.
//!
//! Each region carries a fixed weighted table of weather kinds. Generation
//! draws kind, intensity, and duration from an injected RNG; the selection
//! math is factored into pure functions of uniform `[0, 1)` draws so tests
//! can sweep the unit interval instead of mocking the RNG.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use arcanum_core::Region;

use crate::effects;

/// A weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    /// Open skies.
    Clear,
    /// Heavy cloud cover.
    Overcast,
    /// Steady rainfall.
    Rain,
    /// Thunder, lightning, and driving rain.
    Storm,
    /// Thick ground-level mist.
    Fog,
    /// Falling snow.
    Snow,
    /// Oppressive, dangerous heat.
    ExtremeHeat,
    /// Sustained hard wind.
    StrongWind,
}

impl WeatherKind {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            WeatherKind::Clear => "Clear",
            WeatherKind::Overcast => "Overcast",
            WeatherKind::Rain => "Rain",
            WeatherKind::Storm => "Storm",
            WeatherKind::Fog => "Fog",
            WeatherKind::Snow => "Snow",
            WeatherKind::ExtremeHeat => "Extreme Heat",
            WeatherKind::StrongWind => "Strong Wind",
        }
    }
}

impl std::fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity tier of the current weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Barely noticeable.
    Light,
    /// Clearly felt at the table.
    Moderate,
    /// Dominates the scene.
    Severe,
}

impl Intensity {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Intensity::Light => "Light",
            Intensity::Moderate => "Moderate",
            Intensity::Severe => "Severe",
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A weather instance: condition, severity, lifetime, and derived effects.
///
/// Replaced wholesale on every regeneration; `elapsed_game_minutes` is
/// recomputed by the orchestrator from the clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherState {
    /// The weather condition.
    pub kind: WeatherKind,
    /// Severity tier.
    pub intensity: Intensity,
    /// Total lifetime of this instance, in game minutes (60-480, whole hours).
    pub duration_game_minutes: u32,
    /// Game minutes consumed since this weather began.
    pub elapsed_game_minutes: u32,
    /// Mechanical effects derived from kind and intensity.
    pub effects: Vec<String>,
}

impl WeatherState {
    /// Game minutes left before this weather expires.
    pub fn remaining_minutes(&self) -> u32 {
        self.duration_game_minutes
            .saturating_sub(self.elapsed_game_minutes)
    }

    /// Whether this instance has consumed its full duration.
    pub fn is_expired(&self) -> bool {
        self.elapsed_game_minutes >= self.duration_game_minutes
    }
}

/// The weighted weather table for a region.
///
/// Weights are positive integers and need not sum to 100; draws normalize by
/// the total.
pub fn probability_table(region: Region) -> &'static [(WeatherKind, u32)] {
    use WeatherKind::*;
    match region {
        Region::Forest => &[
            (Clear, 25),
            (Overcast, 25),
            (Rain, 25),
            (Storm, 10),
            (Fog, 10),
            (Snow, 2),
            (StrongWind, 3),
        ],
        Region::Mountain => &[
            (Clear, 15),
            (Overcast, 20),
            (Rain, 15),
            (Storm, 10),
            (Fog, 10),
            (Snow, 15),
            (StrongWind, 15),
        ],
        Region::Coast => &[
            (Clear, 30),
            (Overcast, 20),
            (Rain, 20),
            (Storm, 15),
            (Fog, 5),
            (StrongWind, 10),
        ],
        Region::Desert => &[
            (Clear, 40),
            (ExtremeHeat, 30),
            (StrongWind, 15),
            (Overcast, 10),
            (Storm, 5),
        ],
        Region::City => &[
            (Clear, 30),
            (Overcast, 30),
            (Rain, 20),
            (Storm, 5),
            (Fog, 10),
            (Snow, 3),
            (StrongWind, 2),
        ],
        Region::Swamp => &[
            (Clear, 10),
            (Overcast, 20),
            (Rain, 30),
            (Fog, 25),
            (Storm, 10),
            (ExtremeHeat, 5),
        ],
        Region::Underground => &[(Overcast, 70), (Fog, 25), (StrongWind, 5)],
        Region::Custom => &[
            (Clear, 25),
            (Overcast, 20),
            (Rain, 20),
            (Storm, 10),
            (Fog, 10),
            (Snow, 5),
            (ExtremeHeat, 5),
            (StrongWind, 5),
        ],
    }
}

/// A region's table normalized to percentages, in table order.
pub fn forecast(region: Region) -> Vec<(WeatherKind, u32, f64)> {
    let table = probability_table(region);
    let total: u32 = table.iter().map(|(_, w)| w).sum();
    table
        .iter()
        .map(|&(kind, weight)| (kind, weight, f64::from(weight) / f64::from(total) * 100.0))
        .collect()
}

/// Pick a kind from a weighted table given a uniform `[0, 1)` draw.
///
/// Walks the cumulative weights; the last entry is the fallback should
/// rounding leave a remainder.
fn pick_kind(table: &[(WeatherKind, u32)], roll: f64) -> WeatherKind {
    let total: u32 = table.iter().map(|(_, w)| w).sum();
    let mut remaining = roll * f64::from(total);
    for &(kind, weight) in table {
        remaining -= f64::from(weight);
        if remaining <= 0.0 {
            return kind;
        }
    }
    table[table.len() - 1].0
}

/// Pick an intensity given a uniform `[0, 1)` draw: 40% light, 40% moderate,
/// 20% severe.
fn pick_intensity(roll: f64) -> Intensity {
    if roll < 0.4 {
        Intensity::Light
    } else if roll < 0.8 {
        Intensity::Moderate
    } else {
        Intensity::Severe
    }
}

/// Pick a duration given a uniform `[0, 1)` draw: 1-8 whole game hours.
fn pick_duration(roll: f64) -> u32 {
    ((roll * 8.0).floor() as u32 + 1) * 60
}

/// Generate a fresh weather instance for a region.
///
/// Always returns a valid state whose kind is drawn from the region's table;
/// non-deterministic by design, deterministic under a seeded `rng`.
pub fn generate(region: Region, rng: &mut StdRng) -> WeatherState {
    let kind = pick_kind(probability_table(region), rng.random());
    let intensity = pick_intensity(rng.random());
    let duration = pick_duration(rng.random());
    WeatherState {
        kind,
        intensity,
        duration_game_minutes: duration,
        elapsed_game_minutes: 0,
        effects: effects::effects_for(kind, intensity)
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    }
}
