//! Map configuration: initial view, background layers, and GeoJSON feeds.
//!
//! `MapConfig::default()` carries the production setup: the USGS all-week
//! earthquake feed and the fraxen tectonic plate boundaries, two selectable
//! basemaps, and a view centered on the continental US.

use crate::core::geo::LatLng;
use crate::layers::tile::TileLayer;

/// USGS summary feed of all recorded earthquakes over the past week.
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 tectonic plate boundary lines.
pub const PLATE_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Which conversion rule a feed's features go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// Point features styled per-event by depth and magnitude.
    Earthquakes,
    /// Line features drawn with one fixed style.
    PlateBoundaries,
}

/// One remote GeoJSON source and the overlay group it populates.
#[derive(Debug, Clone)]
pub struct FeedSpec {
    /// Display name of the overlay group, as shown in the layer switcher.
    pub overlay: String,
    pub url: String,
    pub kind: FeedKind,
}

impl FeedSpec {
    pub fn new(overlay: impl Into<String>, url: impl Into<String>, kind: FeedKind) -> Self {
        Self {
            overlay: overlay.into(),
            url: url.into(),
            kind,
        }
    }
}

/// Top-level map configuration
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: f64,
    pub basemaps: Vec<TileLayer>,
    pub feeds: Vec<FeedSpec>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(37.09, -95.71),
            zoom: 5.0,
            basemaps: vec![TileLayer::openstreetmap(), TileLayer::opentopomap()],
            feeds: vec![
                FeedSpec::new("Earthquakes", EARTHQUAKE_FEED_URL, FeedKind::Earthquakes),
                FeedSpec::new(
                    "Tectonic Plates",
                    PLATE_FEED_URL,
                    FeedKind::PlateBoundaries,
                ),
            ],
        }
    }
}

impl MapConfig {
    /// Configuration with no basemaps or feeds, for building up piecemeal
    pub fn empty() -> Self {
        Self {
            center: LatLng::default(),
            zoom: 0.0,
            basemaps: Vec::new(),
            feeds: Vec::new(),
        }
    }

    /// Set the initial center and zoom level
    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    /// Add a background tile layer
    pub fn with_basemap(mut self, basemap: TileLayer) -> Self {
        self.basemaps.push(basemap);
        self
    }

    /// Add a GeoJSON feed and its overlay group
    pub fn with_feed(mut self, feed: FeedSpec) -> Self {
        self.feeds.push(feed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapConfig::default();

        assert_eq!(config.zoom, 5.0);
        assert_eq!(config.basemaps.len(), 2);
        assert_eq!(config.feeds.len(), 2);
        assert_eq!(config.feeds[0].overlay, "Earthquakes");
        assert_eq!(config.feeds[0].kind, FeedKind::Earthquakes);
        assert_eq!(config.feeds[1].overlay, "Tectonic Plates");
        assert_eq!(config.feeds[1].kind, FeedKind::PlateBoundaries);
    }

    #[test]
    fn test_builder_methods() {
        let config = MapConfig::empty()
            .with_view(LatLng::new(35.68, 139.65), 8.0)
            .with_basemap(TileLayer::openstreetmap())
            .with_feed(FeedSpec::new(
                "Quakes",
                "https://example.com/feed.geojson",
                FeedKind::Earthquakes,
            ));

        assert_eq!(config.zoom, 8.0);
        assert_eq!(config.basemaps.len(), 1);
        assert_eq!(config.feeds.len(), 1);
    }
}
