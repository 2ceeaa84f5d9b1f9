//! Map controls: the layer switcher and the legend panel.

use crate::core::session::MapSession;
use crate::legend::Legend;
use crate::ui::{parse_hex_color, Position};
use egui::{Context, Sense, Ui};

/// Layer switcher control: one radio row per basemap, one checkbox per
/// overlay group. Anchored top-right by convention.
pub struct LayerControl {
    position: Position,
    visible: bool,
}

impl LayerControl {
    pub fn new() -> Self {
        Self {
            position: Position::TopRight,
            visible: true,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Renders the switcher and applies any selection changes to the session
    pub fn show(&self, ctx: &Context, session: &mut MapSession) {
        if !self.visible {
            return;
        }

        let (align, offset) = self.position.anchor();
        egui::Area::new(egui::Id::new("quakemap-layer-control"))
            .anchor(align, offset)
            .show(ctx, |ui| {
                egui::Frame::window(&ctx.style()).show(ui, |ui| {
                    self.basemap_rows(ui, session);
                    if !session.overlays().is_empty() {
                        ui.separator();
                        self.overlay_rows(ui, session);
                    }
                });
            });
    }

    fn basemap_rows(&self, ui: &mut Ui, session: &mut MapSession) {
        let names: Vec<String> = session
            .basemaps()
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        let mut active = session
            .active_basemap()
            .map(|b| b.name().to_string())
            .unwrap_or_default();

        for name in names {
            if ui.radio_value(&mut active, name.clone(), name.as_str()).changed() {
                // The name came from the session, so selection cannot fail
                let _ = session.select_basemap(&active);
            }
        }
    }

    fn overlay_rows(&self, ui: &mut Ui, session: &mut MapSession) {
        let names: Vec<String> = session
            .overlays()
            .iter()
            .map(|o| o.name().to_string())
            .collect();

        for name in names {
            let mut visible = session.overlay(&name).is_some_and(|o| o.is_visible());
            if ui.checkbox(&mut visible, name.as_str()).changed() {
                session.set_overlay_visible(&name, visible);
            }
        }
    }
}

impl Default for LayerControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Static legend panel: six color swatches with their depth range labels.
/// Built once at construction, anchored bottom-right, never re-rendered
/// with different content.
pub struct LegendControl {
    legend: Legend,
    position: Position,
    visible: bool,
}

impl LegendControl {
    pub fn new() -> Self {
        Self {
            legend: Legend::depth_bands(),
            position: Position::BottomRight,
            visible: true,
        }
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn show(&self, ctx: &Context) {
        if !self.visible {
            return;
        }

        let (align, offset) = self.position.anchor();
        egui::Area::new(egui::Id::new("quakemap-legend"))
            .anchor(align, offset)
            .show(ctx, |ui| {
                egui::Frame::window(&ctx.style()).show(ui, |ui| {
                    ui.strong(self.legend.title());
                    for entry in self.legend.entries() {
                        ui.horizontal(|ui| {
                            self.swatch(ui, entry.color);
                            ui.label(entry.label.as_str());
                        });
                    }
                });
            });
    }

    fn swatch(&self, ui: &mut Ui, color: &str) {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::hover());
        ui.painter().rect_filled(rect, 2.0, parse_hex_color(color));
    }
}

impl Default for LegendControl {
    fn default() -> Self {
        Self::new()
    }
}
