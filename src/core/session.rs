//! The map session: the single owned handle every component mutates through.
//!
//! Instead of a global map object captured by callbacks, the session is
//! passed explicitly to the controls and the feed event pump. All mutation
//! happens on the UI thread; feed tasks only hand results over a channel.

use crate::core::config::MapConfig;
use crate::core::geo::LatLng;
use crate::data::loader::FeedEvent;
use crate::layers::{overlay::OverlayGroup, tile::TileLayer};
use crate::{MapError, Result};
use std::sync::mpsc::Receiver;

pub struct MapSession {
    center: LatLng,
    zoom: f64,
    basemaps: Vec<TileLayer>,
    active_basemap: usize,
    /// Overlay groups in registration order, addressed by display name
    overlays: Vec<OverlayGroup>,
}

impl MapSession {
    /// Sets up the map view: basemaps, initial center and zoom, and one
    /// empty overlay group registered per configured feed.
    pub fn new(config: MapConfig) -> Self {
        let mut session = Self {
            center: config.center,
            zoom: config.zoom,
            basemaps: config.basemaps,
            active_basemap: 0,
            overlays: Vec::new(),
        };
        for feed in &config.feeds {
            session.register_overlay(&feed.overlay);
        }
        session
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn set_center(&mut self, center: LatLng) {
        self.center = center;
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(1.0, 18.0);
    }

    pub fn basemaps(&self) -> &[TileLayer] {
        &self.basemaps
    }

    /// The currently visible background layer
    pub fn active_basemap(&self) -> Option<&TileLayer> {
        self.basemaps.get(self.active_basemap)
    }

    /// Switch the background layer by display name
    pub fn select_basemap(&mut self, name: &str) -> Result<()> {
        match self.basemaps.iter().position(|b| b.name() == name) {
            Some(index) => {
                self.active_basemap = index;
                Ok(())
            }
            None => Err(MapError::Layer(format!("unknown basemap: {}", name))),
        }
    }

    /// Registers an empty, hidden overlay group. Re-registering an existing
    /// name keeps the existing group.
    pub fn register_overlay(&mut self, name: &str) {
        if self.overlay(name).is_none() {
            self.overlays.push(OverlayGroup::new(name));
        }
    }

    /// Overlay groups in registration order
    pub fn overlays(&self) -> &[OverlayGroup] {
        &self.overlays
    }

    pub fn overlay(&self, name: &str) -> Option<&OverlayGroup> {
        self.overlays.iter().find(|o| o.name() == name)
    }

    pub fn overlay_mut(&mut self, name: &str) -> Option<&mut OverlayGroup> {
        self.overlays.iter_mut().find(|o| o.name() == name)
    }

    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) {
        if let Some(group) = self.overlay_mut(name) {
            group.set_visible(visible);
        }
    }

    /// Applies one completed feed load: inserts the shapes into the named
    /// group and makes it visible. Groups are registered on demand so a
    /// feed added after setup still lands somewhere.
    pub fn apply(&mut self, event: FeedEvent) {
        self.register_overlay(&event.overlay);
        if let Some(group) = self.overlay_mut(&event.overlay) {
            group.extend(event.shapes);
            group.set_visible(true);
        }
    }

    /// Drains pending feed events from the loader channel. Called from the
    /// UI thread each frame; returns how many events were applied.
    pub fn pump(&mut self, events: &Receiver<FeedEvent>) -> usize {
        let mut applied = 0;
        while let Ok(event) = events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }
}
