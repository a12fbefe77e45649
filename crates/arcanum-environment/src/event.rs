//! Narrative events, the bounded event log, and region event tables.
//!
//! Each region defines groups of candidate events keyed by a set of trigger
//! weather kinds. Generation filters groups by the current weather, picks a
//! group uniformly, then an event within it uniformly. No match is a valid
//! outcome, not an error.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use arcanum_core::Region;

use crate::weather::WeatherKind;

/// Maximum number of retained log entries; the oldest are evicted first.
pub const MAX_EVENTS: usize = 20;

/// A narrative event that occurred at a specific in-fiction minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentEvent {
    /// Unique identifier.
    pub id: Uuid,
    /// What happens, narratively.
    pub description: String,
    /// The table-facing mechanical consequence.
    pub mechanical_effect: String,
    /// In-fiction minute at which the event occurred.
    pub timestamp: u64,
}

impl EnvironmentEvent {
    /// Create an event stamped with the given in-fiction minute.
    pub fn new(
        description: impl Into<String>,
        mechanical_effect: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            mechanical_effect: mechanical_effect.into(),
            timestamp,
        }
    }
}

/// An ordered event log capped at [`MAX_EVENTS`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    entries: Vec<EnvironmentEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, evicting the oldest entries beyond the cap.
    pub fn push(&mut self, event: EnvironmentEvent) {
        self.entries.push(event);
        if self.entries.len() > MAX_EVENTS {
            let excess = self.entries.len() - MAX_EVENTS;
            self.entries.drain(..excess);
        }
    }

    /// All retained entries, oldest first.
    pub fn entries(&self) -> &[EnvironmentEvent] {
        &self.entries
    }

    /// The most recently logged event.
    pub fn last(&self) -> Option<&EnvironmentEvent> {
        self.entries.last()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no events have been retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Policy governing how generated events are surfaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventMode {
    /// Generated events are logged immediately.
    Automatic,
    /// Generated events are held as a single pending candidate for the game
    /// master to accept or dismiss.
    #[default]
    Suggestion,
    /// No automatic attempts; only explicit generation produces events.
    Manual,
}

impl EventMode {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            EventMode::Automatic => "automatic",
            EventMode::Suggestion => "suggestion",
            EventMode::Manual => "manual",
        }
    }
}

impl std::fmt::Display for EventMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for EventMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "automatic" => Ok(EventMode::Automatic),
            "suggestion" => Ok(EventMode::Suggestion),
            "manual" => Ok(EventMode::Manual),
            other => Err(format!("unknown event mode: {other}")),
        }
    }
}

/// An event candidate from a region table, before it is stamped and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSpark {
    /// What happens, narratively.
    pub description: &'static str,
    /// The table-facing mechanical consequence.
    pub mechanical_effect: &'static str,
}

/// A group of candidate events sharing a trigger-weather set.
struct EventGroup {
    weather: &'static [WeatherKind],
    sparks: &'static [EventSpark],
}

const fn spark(description: &'static str, mechanical_effect: &'static str) -> EventSpark {
    EventSpark {
        description,
        mechanical_effect,
    }
}

fn event_groups(region: Region) -> &'static [EventGroup] {
    use WeatherKind::*;
    match region {
        Region::Forest => {
            const GROUPS: &[EventGroup] = &[
            EventGroup {
                weather: &[Rain, Storm],
                sparks: &[
                    spark(
                        "A tree crashes down across the path",
                        "DEX save DC 13 or 2d6 damage",
                    ),
                    spark(
                        "The river has burst its banks",
                        "Difficult terrain, STR check DC 12 to cross",
                    ),
                    spark(
                        "The rain releases a cloud of spores",
                        "CON save DC 11 or poisoned for 1 hour",
                    ),
                ],
            },
            EventGroup {
                weather: &[Fog],
                sparks: &[
                    spark(
                        "Strange sounds drift through the fog",
                        "WIS save DC 12 or frightened for 1 minute",
                    ),
                    spark(
                        "Creatures lie in ambush",
                        "Surprised if passive Perception < 14",
                    ),
                ],
            },
            EventGroup {
                weather: &[Clear, Overcast],
                sparks: &[
                    spark(
                        "A herd of animals crosses the trail",
                        "Path blocked for 10 minutes",
                    ),
                    spark(
                        "Rare herbs grow by the wayside",
                        "Nature check DC 13: 1d4 medicinal herbs",
                    ),
                ],
            },
            ];
            GROUPS
        }
        Region::Mountain => {
            const GROUPS: &[EventGroup] = &[
            EventGroup {
                weather: &[StrongWind, Storm],
                sparks: &[
                    spark(
                        "Avalanche risk!",
                        "DEX save DC 15 or 4d6 damage and buried",
                    ),
                    spark(
                        "Lightning strikes close by",
                        "DEX save DC 12 or 2d8 lightning damage",
                    ),
                ],
            },
            EventGroup {
                weather: &[Snow],
                sparks: &[
                    spark(
                        "The pass is iced over",
                        "Acrobatics check DC 13 or fall, 1d6 damage",
                    ),
                    spark("Starving wolves on the hunt", "Encounter: 1d4+2 wolves"),
                ],
            },
            EventGroup {
                weather: &[Clear, Overcast],
                sparks: &[spark(
                    "A giant eagle circles overhead",
                    "Possible mount or combat",
                )],
            },
            ];
            GROUPS
        }
        Region::Coast => {
            const GROUPS: &[EventGroup] = &[
            EventGroup {
                weather: &[Storm, StrongWind],
                sparks: &[
                    spark(
                        "A rogue wave crashes in!",
                        "STR save DC 14 or dragged 9 m, 2d6 damage",
                    ),
                    spark(
                        "A shipwreck comes into view",
                        "Possible exploration or rescue",
                    ),
                ],
            },
            EventGroup {
                weather: &[Clear, Overcast, Rain],
                sparks: &[spark(
                    "The tide turns, revealing a cave",
                    "Access to a hidden area for 2 hours",
                )],
            },
            ];
            GROUPS
        }
        Region::Desert => {
            const GROUPS: &[EventGroup] = &[
            EventGroup {
                weather: &[ExtremeHeat],
                sparks: &[
                    spark(
                        "Sandstorm!",
                        "Visibility zero, CON save DC 14 each round or suffocate",
                    ),
                    spark(
                        "A deceptive mirage",
                        "WIS save DC 13 or lose 1 hour of travel",
                    ),
                ],
            },
            EventGroup {
                weather: &[StrongWind],
                sparks: &[spark(
                    "Scorpions surge out of the sand",
                    "Encounter: 2d4 giant scorpions",
                )],
            },
            EventGroup {
                weather: &[Clear, Overcast],
                sparks: &[spark(
                    "Wind-scoured ruins stand half revealed",
                    "Investigation check DC 12: treasure or trap",
                )],
            },
            ];
            GROUPS
        }
        Region::City => {
            const GROUPS: &[EventGroup] = &[
            EventGroup {
                weather: &[Rain, Storm],
                sparks: &[
                    spark(
                        "The low streets are flooding",
                        "Difficult terrain, shops closed",
                    ),
                    spark(
                        "Rats pour out of the sewers",
                        "Disease risk, CON save DC 10",
                    ),
                ],
            },
            EventGroup {
                weather: &[Clear, Overcast],
                sparks: &[
                    spark(
                        "A street festival!",
                        "+2 on social checks, prices 20% lower",
                    ),
                    spark(
                        "A brawl spills into the street",
                        "Guards distracted, opportunity or danger",
                    ),
                ],
            },
            ];
            GROUPS
        }
        Region::Swamp => {
            const GROUPS: &[EventGroup] = &[
            EventGroup {
                weather: &[Rain, Fog],
                sparks: &[
                    spark(
                        "Swamp gas!",
                        "CON save DC 13 or poisoned and confused for 1 hour",
                    ),
                    spark(
                        "A lurking crocodile strikes",
                        "Surprised if passive Perception < 15",
                    ),
                ],
            },
            EventGroup {
                weather: &[Clear, Overcast, ExtremeHeat],
                sparks: &[spark(
                    "A swarm of biting insects descends",
                    "-1 on everything until a rest, disease risk",
                )],
            },
            ];
            GROUPS
        }
        Region::Underground => {
            const GROUPS: &[EventGroup] = &[EventGroup {
            weather: &[Overcast, Fog, StrongWind],
            sparks: &[
                spark(
                    "Partial cave-in",
                    "DEX save DC 14 or 3d6 damage, path blocked",
                ),
                spark(
                    "Water seeps through the walls",
                    "Slippery ground, torches may go out",
                ),
                spark(
                    "A giant web blocks the passage",
                    "STR check DC 12 to break through or go around",
                ),
            ],
        }];
            GROUPS
        }
        Region::Custom => {
            const GROUPS: &[EventGroup] = &[EventGroup {
            weather: &[
                Clear, Overcast, Rain, Storm, Fog, Snow, ExtremeHeat, StrongWind,
            ],
            sparks: &[
                spark(
                    "An inexplicable happening",
                    "The game master decides the effect",
                ),
                spark(
                    "A magical anomaly",
                    "Saving throw DC 13 or a random effect",
                ),
            ],
        }];
            GROUPS
        }
    }
}

/// Try to draw an event matching the region and current weather.
///
/// Filters the region's groups by trigger weather; returns `None` when no
/// group matches. Otherwise picks one matching group uniformly, then one
/// event within it uniformly.
pub fn try_generate(region: Region, weather: WeatherKind, rng: &mut StdRng) -> Option<EventSpark> {
    let groups = event_groups(region);
    let matching: Vec<&EventGroup> = groups.iter().filter(|g| g.weather.contains(&weather)).collect();
    if matching.is_empty() {
        return None;
    }
    let group = matching[rng.random_range(0..matching.len())];
    Some(group.sparks[rng.random_range(0..group.sparks.len())])
}
