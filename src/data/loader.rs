//! Asynchronous GeoJSON feed loading.
//!
//! Each configured feed is fetched once on its own detached task; completed
//! loads come back to the UI thread as [`FeedEvent`]s over an `mpsc`
//! channel. A failed fetch or parse is logged and produces no event, so the
//! corresponding overlay simply stays empty while other feeds proceed
//! independently. No retries, no timeouts, no cancellation.

use crate::core::config::{FeedKind, FeedSpec};
use crate::data::geojson::GeoJson;
use crate::layers::overlay::Shape;
use crate::style::{earthquake_style, plate_style};
use crate::Result;
use once_cell::sync::Lazy;
use reqwest::Client;
use std::sync::mpsc::Sender;

/// Shared HTTP client with a custom User-Agent so that public feed servers
/// don't reject the request. Building the client once avoids the cost of
/// TLS and connection pool setup for every feed.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("quakemap/0.1 (+https://github.com/example/quakemap)")
        .build()
        .expect("failed to build reqwest client")
});

/// A completed feed load: shapes destined for one overlay group
#[derive(Debug, Clone)]
pub struct FeedEvent {
    pub overlay: String,
    pub shapes: Vec<Shape>,
}

/// Fetches GeoJSON feeds and reports completed loads over a channel.
pub struct FeedLoader {
    tx: Sender<FeedEvent>,
}

impl FeedLoader {
    /// Create a new loader given a sender to report completed loads.
    pub fn new(tx: Sender<FeedEvent>) -> Self {
        Self { tx }
    }

    /// Start one independent fetch task per feed. Completion order between
    /// feeds is unspecified and no task blocks another.
    pub fn start(&self, feeds: &[FeedSpec]) {
        for feed in feeds {
            self.start_feed(feed.clone());
        }
    }

    /// Start fetching one feed on a detached task. Errors never reach the
    /// caller: the task logs them and sends nothing.
    pub fn start_feed(&self, feed: FeedSpec) {
        let tx = self.tx.clone();

        tokio::spawn(async move {
            log::debug!("fetching {} feed from {}", feed.overlay, feed.url);
            match load_feed(&feed).await {
                Ok(shapes) => {
                    log::info!("loaded {} shapes for {}", shapes.len(), feed.overlay);
                    let _ = tx.send(FeedEvent {
                        overlay: feed.overlay,
                        shapes,
                    });
                }
                Err(e) => {
                    log::warn!("{} feed failed, overlay stays empty: {}", feed.overlay, e);
                }
            }
        });
    }
}

/// Fetch and convert one feed
pub async fn load_feed(feed: &FeedSpec) -> Result<Vec<Shape>> {
    let response = HTTP_CLIENT.get(&feed.url).send().await?.error_for_status()?;
    let data: GeoJson = response.json().await?;
    Ok(shapes_for_feed(feed.kind, &data))
}

/// Pure conversion from a parsed GeoJSON document to renderable shapes
pub fn shapes_for_feed(kind: FeedKind, data: &GeoJson) -> Vec<Shape> {
    match kind {
        FeedKind::Earthquakes => earthquake_shapes(data),
        FeedKind::PlateBoundaries => plate_shapes(data),
    }
}

/// One circle marker per point feature, styled by depth and magnitude,
/// with a magnitude/location popup.
fn earthquake_shapes(data: &GeoJson) -> Vec<Shape> {
    let mut shapes = Vec::new();

    for feature in data.features() {
        let geometry = match &feature.geometry {
            Some(g) => g,
            None => continue,
        };
        let center = match geometry.point_lat_lng() {
            Some(c) => c,
            None => continue,
        };

        let depth = geometry.point_depth().unwrap_or(0.0);
        let magnitude = feature.magnitude().unwrap_or(0.0);
        let popup = format!(
            "Magnitude: {}\nLocation: {}",
            magnitude,
            feature.place().unwrap_or("unknown")
        );

        shapes.push(Shape::CircleMarker {
            center,
            style: earthquake_style(depth, magnitude),
            popup: Some(popup),
        });
    }

    shapes
}

/// One fixed-style polyline per line path; no per-feature styling
fn plate_shapes(data: &GeoJson) -> Vec<Shape> {
    let style = plate_style();
    let mut shapes = Vec::new();

    for feature in data.features() {
        if let Some(geometry) = &feature.geometry {
            for points in geometry.line_paths() {
                if points.len() >= 2 {
                    shapes.push(Shape::Polyline {
                        points,
                        style: style.clone(),
                    });
                }
            }
        }
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    const QUAKES: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"mag": 6.5, "place": "off the coast"},
                "geometry": {"type": "Point", "coordinates": [142.0, 38.3, 95.0]}
            },
            {
                "type": "Feature",
                "properties": {"mag": 0, "place": "quarry blast"},
                "geometry": {"type": "Point", "coordinates": [-120.0, 36.0, 5.0]}
            }
        ]
    }
    "#;

    const PLATES: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"Name": "boundary"},
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[140.0, 35.0], [141.0, 36.0], [142.0, 37.0]]
                }
            }
        ]
    }
    "#;

    #[test]
    fn test_earthquake_conversion() {
        let data: GeoJson = serde_json::from_str(QUAKES).unwrap();
        let shapes = shapes_for_feed(FeedKind::Earthquakes, &data);
        assert_eq!(shapes.len(), 2);

        match &shapes[0] {
            Shape::CircleMarker {
                style, popup, ..
            } => {
                assert_eq!(style.fill_color, "#ff5f65");
                assert_eq!(style.radius, 26.0);
                let popup = popup.as_deref().unwrap();
                assert!(popup.contains("Magnitude: 6.5"));
                assert!(popup.contains("Location: off the coast"));
            }
            other => panic!("expected circle marker, got {:?}", other),
        }

        match &shapes[1] {
            Shape::CircleMarker { style, .. } => {
                assert_eq!(style.fill_color, "#a3f600");
                assert_eq!(style.radius, 1.0);
            }
            other => panic!("expected circle marker, got {:?}", other),
        }
    }

    #[test]
    fn test_plate_conversion() {
        let data: GeoJson = serde_json::from_str(PLATES).unwrap();
        let shapes = shapes_for_feed(FeedKind::PlateBoundaries, &data);
        assert_eq!(shapes.len(), 1);

        match &shapes[0] {
            Shape::Polyline { points, style } => {
                assert_eq!(points.len(), 3);
                assert_eq!(style.color, "#ffa500");
                assert_eq!(style.weight, 2.0);
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_features_without_point_geometry_skipped() {
        let data: GeoJson = serde_json::from_str(PLATES).unwrap();
        // Line features run through the earthquake rule produce nothing
        assert!(shapes_for_feed(FeedKind::Earthquakes, &data).is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_feed_emits_nothing() {
        let (tx, rx) = mpsc::channel();
        let loader = FeedLoader::new(tx);

        loader.start_feed(FeedSpec::new(
            "Earthquakes",
            "http://127.0.0.1:9/unreachable.geojson",
            FeedKind::Earthquakes,
        ));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(rx.try_recv().is_err());
    }
}
