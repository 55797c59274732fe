// src/map_config.rs
use crate::view_transform::ZoomLimits;

/// Compile-time settings for the map page.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub zoom: ZoomLimits,
    /// Distance in px between the cursor and the tooltip.
    pub tooltip_gap: f64,
    /// Accessible name of the map drawing.
    pub map_label: String,
    pub data_source: DataSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub label: String,
    pub url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomLimits::default(),
            tooltip_gap: 12.0,
            map_label: String::from("Political Map of India"),
            data_source: DataSource {
                label: String::from("Census of India"),
                url: String::from("https://www.census2011.co.in/"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MapConfig::default();
        assert_eq!(config.zoom.min, 0.5);
        assert_eq!(config.zoom.max, 3.0);
        assert_eq!(config.zoom.step, 0.2);
        assert_eq!(config.tooltip_gap, 12.0);
        assert_eq!(config.map_label, "Political Map of India");
        assert_eq!(config.data_source.label, "Census of India");
    }
}
