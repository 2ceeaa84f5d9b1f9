//! Minimal serde model of the GeoJSON documents the feeds return.
//!
//! Positions are kept as full coordinate arrays rather than fixed pairs
//! because earthquake points carry their depth as a third component.
//! Structural validation stops at what serde enforces; a document that
//! parses is trusted from here on.

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// GeoJSON geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Vec<f64> },
    LineString { coordinates: Vec<Vec<f64>> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPoint { coordinates: Vec<Vec<f64>> },
    MultiLineString { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
}

/// GeoJSON feature with geometry and a properties bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(Feature),
    FeatureCollection { features: Vec<Feature> },
}

impl GeoJson {
    /// All features in document order
    pub fn features(&self) -> Vec<&Feature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features } => features.iter().collect(),
        }
    }
}

impl Feature {
    /// Numeric property lookup
    pub fn property_f64(&self, key: &str) -> Option<f64> {
        self.properties.as_ref()?.get(key)?.as_f64()
    }

    /// String property lookup
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key)?.as_str()
    }

    /// Earthquake magnitude (`mag` property)
    pub fn magnitude(&self) -> Option<f64> {
        self.property_f64("mag")
    }

    /// Human-readable location (`place` property)
    pub fn place(&self) -> Option<&str> {
        self.property_str("place")
    }
}

impl Geometry {
    /// Location of a point geometry; `None` for other geometry types or
    /// incomplete coordinate arrays.
    pub fn point_lat_lng(&self) -> Option<LatLng> {
        match self {
            Geometry::Point { coordinates } if coordinates.len() >= 2 => {
                Some(LatLng::new(coordinates[1], coordinates[0]))
            }
            _ => None,
        }
    }

    /// Depth component of a point geometry, if the feed supplied one
    pub fn point_depth(&self) -> Option<f64> {
        match self {
            Geometry::Point { coordinates } => coordinates.get(2).copied(),
            _ => None,
        }
    }

    /// Line paths of this geometry, one `Vec<LatLng>` per drawable line.
    /// Polygons contribute their rings as closed lines.
    pub fn line_paths(&self) -> Vec<Vec<LatLng>> {
        fn path(coordinates: &[Vec<f64>]) -> Vec<LatLng> {
            coordinates
                .iter()
                .filter(|c| c.len() >= 2)
                .map(|c| LatLng::new(c[1], c[0]))
                .collect()
        }

        match self {
            Geometry::LineString { coordinates } => vec![path(coordinates)],
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter().map(|line| path(line)).collect()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(|ring| path(ring)))
                .collect(),
            _ => Vec::new(),
        }
    }
}
