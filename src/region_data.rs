// src/region_data.rs
use crate::error::MapDataError;
use serde::{Deserialize, Serialize};

const REGIONS_JSON: &str = include_str!("../public/data/regions.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKind {
    State,
    UnionTerritory,
}

impl RegionKind {
    pub fn label(self) -> &'static str {
        match self {
            RegionKind::State => "State",
            RegionKind::UnionTerritory => "Union Territory",
        }
    }

    /// Compact badge text used in search results.
    pub fn short_label(self) -> &'static str {
        match self {
            RegionKind::State => "State",
            RegionKind::UnionTerritory => "UT",
        }
    }
}

/// Geographic zone a region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    North,
    South,
    East,
    West,
    Central,
    Northeast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub capital: String,
    #[serde(rename = "type")]
    pub kind: RegionKind,
    #[serde(rename = "region")]
    pub zone: Zone,
    pub population: String,
    pub area: String,
    pub languages: Vec<String>,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The immutable table of states and union territories.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    regions: Vec<Region>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self, MapDataError> {
        let regions: Vec<Region> = serde_json::from_str(json)?;
        Ok(Self { regions })
    }

    /// Parse the table compiled into the binary.
    pub fn load() -> Result<Self, MapDataError> {
        let dataset = Self::from_json(REGIONS_JSON)?;
        log::info!("Loaded {} regions", dataset.regions().len());
        Ok(dataset)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn count(&self, kind: RegionKind) -> usize {
        self.regions().iter().filter(|r| r.kind == kind).count()
    }

    pub fn find(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Regions whose name contains `query` or whose id equals it, both
    /// ignoring case. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Region> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.regions
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle) || r.id.to_lowercase() == needle)
            .collect()
    }
}
