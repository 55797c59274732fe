// src/error.rs
use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Failures while turning the embedded map data into usable tables.
#[derive(Debug, Error)]
pub enum MapDataError {
    #[error("region table is malformed: {0}")]
    Regions(#[from] serde_json::Error),

    #[error("image map is not well-formed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("image map has a malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("<{element}> is missing the `{attribute}` attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("area `{id}` has unusable coords `{coords}`")]
    BadCoords { id: String, coords: String },

    #[error("area `{id}` uses unsupported shape `{shape}`")]
    UnknownShape { id: String, shape: String },

    #[error("image map has no <map> element")]
    NoMapElement,
}

impl MapDataError {
    /// Message shown to the user in place of the map.
    pub fn user_message(&self) -> &'static str {
        match self {
            MapDataError::Regions(_) => "Failed to load region data. Please try again later.",
            _ => "Failed to load map. Please try again later.",
        }
    }
}
