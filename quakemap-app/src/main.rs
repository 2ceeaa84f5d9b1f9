//! Standalone earthquake map viewer.
//!
//! Builds the map session from the default configuration, kicks off both
//! feed fetches, and paints the overlays with a Web Mercator projection.
//! Tile imagery is not drawn here; the viewer paints a flat background, the
//! overlays, and the map chrome (layer switcher, legend, attribution).

use eframe::egui;
use quakemap::{
    core::geo::{LatLng, Point, EARTH_RADIUS},
    ui::parse_hex_color,
    FeedEvent, FeedLoader, LayerControl, LegendControl, MapConfig, MapSession, Shape,
};
use std::sync::mpsc::{channel, Receiver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Quakemap - Earthquake Map Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "quakemap-app",
        options,
        Box::new(|cc| Box::new(QuakemapApp::new(cc))),
    )?;

    Ok(())
}

/// The main application struct
struct QuakemapApp {
    session: MapSession,
    events: Receiver<FeedEvent>,
    layer_control: LayerControl,
    legend_control: LegendControl,
}

impl QuakemapApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = MapConfig::default();
        let (tx, rx) = channel();

        // Both feed fetches run independently and report back over the
        // channel in whatever order they complete.
        FeedLoader::new(tx).start(&config.feeds);

        Self {
            session: MapSession::new(config),
            events: rx,
            layer_control: LayerControl::new(),
            legend_control: LegendControl::new(),
        }
    }

    fn to_screen(&self, rect: egui::Rect, p: &LatLng) -> egui::Pos2 {
        let mpp = meters_per_pixel(self.session.zoom());
        let center = self.session.center().to_mercator();
        let projected = p.to_mercator();
        egui::pos2(
            rect.center().x + ((projected.x - center.x) / mpp) as f32,
            rect.center().y - ((projected.y - center.y) / mpp) as f32,
        )
    }

    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if response.dragged() {
            let delta = response.drag_delta();
            let mpp = meters_per_pixel(self.session.zoom());
            let center = self.session.center().to_mercator();
            let moved = Point::new(
                center.x - delta.x as f64 * mpp,
                center.y + delta.y as f64 * mpp,
            );
            self.session.set_center(LatLng::from_mercator(moved));
        }

        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 && response.hovered() {
            let zoom = self.session.zoom() + scroll as f64 * 0.005;
            self.session.set_zoom(zoom);
        }
    }

    fn paint_overlays(&self, ui: &egui::Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        let pointer = ui.ctx().pointer_latest_pos();

        for group in self.session.overlays().iter().filter(|g| g.is_visible()) {
            for shape in group.shapes() {
                match shape {
                    Shape::Polyline { points, style } => {
                        let stroke =
                            egui::Stroke::new(style.weight as f32, parse_hex_color(style.color));
                        let line: Vec<egui::Pos2> =
                            points.iter().map(|p| self.to_screen(rect, p)).collect();
                        painter.add(egui::Shape::line(line, stroke));
                    }
                    Shape::CircleMarker {
                        center,
                        style,
                        popup,
                    } => {
                        let pos = self.to_screen(rect, center);
                        let radius = style.radius as f32;
                        painter.circle(
                            pos,
                            radius,
                            parse_hex_color(style.fill_color),
                            egui::Stroke::new(style.weight as f32, parse_hex_color(style.color)),
                        );

                        if let (Some(pointer), Some(text)) = (pointer, popup) {
                            if pointer.distance(pos) <= radius.max(4.0) {
                                egui::show_tooltip_at_pointer(
                                    ui.ctx(),
                                    egui::Id::new("quakemap-popup"),
                                    |ui| {
                                        ui.label(text.as_str());
                                    },
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    fn paint_attribution(&self, ui: &egui::Ui, rect: egui::Rect) {
        if let Some(basemap) = self.session.active_basemap() {
            ui.painter_at(rect).text(
                rect.left_bottom() + egui::vec2(6.0, -6.0),
                egui::Align2::LEFT_BOTTOM,
                basemap.attribution(),
                egui::FontId::proportional(10.0),
                egui::Color32::DARK_GRAY,
            );
        }
    }
}

/// Web Mercator ground resolution at the session zoom level
fn meters_per_pixel(zoom: f64) -> f64 {
    (2.0 * std::f64::consts::PI * EARTH_RADIUS) / (256.0 * zoom.exp2())
}

impl eframe::App for QuakemapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.pump(&self.events) > 0 {
            ctx.request_repaint();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_rgb(230, 230, 230)))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
                self.handle_input(ui, &response);
                self.paint_overlays(ui, rect);
                self.paint_attribution(ui, rect);
            });

        self.layer_control.show(ctx, &mut self.session);
        self.legend_control.show(ctx);

        // Keep polling for feed completions while idle
        ctx.request_repaint_after(std::time::Duration::from_millis(200));
    }
}
