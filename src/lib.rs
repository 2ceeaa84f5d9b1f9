//! # Quakemap
//!
//! An interactive earthquake map viewer built from Leaflet-style pieces.
//!
//! The library fetches public GeoJSON feeds (USGS weekly earthquakes,
//! tectonic plate boundaries), resolves each earthquake to a visual style
//! (color by depth, radius by magnitude), and manages togglable overlay
//! groups, background tile layers, and a static depth legend. Rendering is
//! left to a thin egui viewer; tile imagery and pan/zoom mechanics are the
//! concern of external collaborators.

pub mod core;
pub mod data;
pub mod layers;
pub mod legend;
pub mod style;

#[cfg(feature = "egui")]
pub mod ui;

// Re-export public API
pub use crate::core::{
    config::{FeedKind, FeedSpec, MapConfig},
    geo::{LatLng, Point},
    session::MapSession,
};

pub use crate::layers::{
    overlay::{OverlayGroup, Shape},
    tile::TileLayer,
};

pub use crate::data::{
    geojson::{Feature, GeoJson, Geometry},
    loader::{FeedEvent, FeedLoader},
};

pub use crate::legend::{Legend, LegendEntry};

pub use crate::style::{
    color_for_depth, earthquake_style, plate_style, radius_for_magnitude, DepthBand, PathStyle,
    DEPTH_BANDS,
};

#[cfg(feature = "egui")]
pub use crate::ui::{LayerControl, LegendControl};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapError;
