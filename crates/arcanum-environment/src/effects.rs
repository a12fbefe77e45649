//! Mechanical effect lookup per weather kind and intensity.
//!
//! A pure, total table: every (kind, intensity) cell has a non-empty list of
//! effect strings for the game master to apply at the table.

use crate::weather::{Intensity, WeatherKind};

/// The mechanical effects of a weather condition at a given intensity.
pub fn effects_for(kind: WeatherKind, intensity: Intensity) -> &'static [&'static str] {
    use Intensity::*;
    use WeatherKind::*;
    match (kind, intensity) {
        (Clear, Light) => &["Normal visibility"],
        (Clear, Moderate) => &["Excellent visibility"],
        (Clear, Severe) => &["+1 to visual Perception"],

        (Overcast, Light) => &["No effects"],
        (Overcast, Moderate) => &["Diffuse light"],
        (Overcast, Severe) => &["-1 to visual Perception at a distance"],

        (Rain, Light) => &["Slightly slippery ground"],
        (Rain, Moderate) => &["-1 Perception", "Slippery ground"],
        (Rain, Severe) => &[
            "-2 Perception",
            "Very slippery ground",
            "Open flames go out in 1d4 rounds",
        ],

        (Storm, Light) => &["-1 Perception", "Moderate wind"],
        (Storm, Moderate) => &[
            "-2 Perception",
            "Occasional lightning",
            "Disadvantage on ranged attacks",
        ],
        (Storm, Severe) => &[
            "-3 Perception",
            "Frequent lightning (1d20, nat 1 = struck)",
            "Long-range communication impossible",
        ],

        (Fog, Light) => &["Reduced visibility (60 m)"],
        (Fog, Moderate) => &["Heavily reduced visibility (9 m)", "+2 Stealth"],
        (Fog, Severe) => &[
            "Near-zero visibility (3 m)",
            "+5 Stealth",
            "Disadvantage on ranged attacks",
        ],

        (Snow, Light) => &["Slightly slippery ground", "Mild cold"],
        (Snow, Moderate) => &[
            "-1 Dexterity",
            "Difficult terrain",
            "CON check DC 10 each hour",
        ],
        (Snow, Severe) => &[
            "-2 Dexterity",
            "Very difficult terrain",
            "CON check DC 15 each hour or exhaustion",
        ],

        (ExtremeHeat, Light) => &["Mild discomfort"],
        (ExtremeHeat, Moderate) => &[
            "CON check DC 10 each hour or exhaustion",
            "Water consumption doubled",
        ],
        (ExtremeHeat, Severe) => &[
            "CON check DC 15 each hour or exhaustion",
            "1d4 fire damage each hour without protection",
        ],

        (StrongWind, Light) => &["Noticeable wind"],
        (StrongWind, Moderate) => &["Disadvantage on ranged attacks", "Flames gutter"],
        (StrongWind, Severe) => &[
            "Ranged attacks impossible",
            "Small creatures: STR check DC 12 or knocked prone",
            "Open flames are snuffed out",
        ],
    }
}
