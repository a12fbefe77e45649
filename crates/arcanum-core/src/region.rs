//! Terrain/setting regions.
//!
//! A region determines which weather probability table and which event
//! groups the environment engine draws from. `Custom` is a free-form region
//! whose display name lives alongside it in the environment state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A terrain or setting category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Dense woodland.
    Forest,
    /// High peaks and passes.
    Mountain,
    /// Shoreline and open water.
    Coast,
    /// Arid dunes and badlands.
    Desert,
    /// Streets, markets, and rooftops.
    City,
    /// Wetlands and stagnant water.
    Swamp,
    /// Caves, tunnels, and buried ruins.
    Underground,
    /// A user-named setting with a generic table.
    Custom,
}

impl Region {
    /// All regions in presentation order.
    pub const ALL: [Region; 8] = [
        Region::Forest,
        Region::Mountain,
        Region::Coast,
        Region::Desert,
        Region::City,
        Region::Swamp,
        Region::Underground,
        Region::Custom,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Region::Forest => "Forest",
            Region::Mountain => "Mountain",
            Region::Coast => "Coast",
            Region::Desert => "Desert",
            Region::City => "City",
            Region::Swamp => "Swamp",
            Region::Underground => "Underground",
            Region::Custom => "Custom",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forest" => Ok(Region::Forest),
            "mountain" => Ok(Region::Mountain),
            "coast" => Ok(Region::Coast),
            "desert" => Ok(Region::Desert),
            "city" => Ok(Region::City),
            "swamp" => Ok(Region::Swamp),
            "underground" => Ok(Region::Underground),
            "custom" => Ok(Region::Custom),
            other => Err(CoreError::UnknownRegion(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_all_regions() {
        for region in Region::ALL {
            let parsed: Region = region.label().parse().unwrap();
            assert_eq!(parsed, region);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("atlantis".parse::<Region>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Region::Underground).unwrap();
        assert_eq!(json, "\"underground\"");
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Region::Underground);
    }
}
