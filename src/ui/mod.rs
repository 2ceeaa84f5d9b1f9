//! egui-rendered map chrome: the layer switcher and the depth legend.

pub mod controls;

pub use controls::{LayerControl, LegendControl};

/// Anchoring for UI controls overlaid on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    const MARGIN: f32 = 10.0;

    /// egui anchor alignment and offset for this corner
    pub fn anchor(&self) -> (egui::Align2, egui::Vec2) {
        let m = Self::MARGIN;
        match self {
            Position::TopLeft => (egui::Align2::LEFT_TOP, egui::vec2(m, m)),
            Position::TopRight => (egui::Align2::RIGHT_TOP, egui::vec2(-m, m)),
            Position::BottomLeft => (egui::Align2::LEFT_BOTTOM, egui::vec2(m, -m)),
            Position::BottomRight => (egui::Align2::RIGHT_BOTTOM, egui::vec2(-m, -m)),
        }
    }
}

/// Parses a `#rrggbb` color string into an egui color. Unparseable input
/// falls back to gray rather than failing a render pass.
pub fn parse_hex_color(hex: &str) -> egui::Color32 {
    fn channels(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    match channels(hex) {
        Some((r, g, b)) => egui::Color32::from_rgb(r, g, b),
        None => egui::Color32::GRAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#a3f600"), egui::Color32::from_rgb(163, 246, 0));
        assert_eq!(parse_hex_color("#000000"), egui::Color32::from_rgb(0, 0, 0));
        assert_eq!(parse_hex_color("not-a-color"), egui::Color32::GRAY);
        assert_eq!(parse_hex_color("#12345"), egui::Color32::GRAY);
    }

    #[test]
    fn test_anchor_corners() {
        let (align, offset) = Position::TopRight.anchor();
        assert_eq!(align, egui::Align2::RIGHT_TOP);
        assert!(offset.x < 0.0 && offset.y > 0.0);

        let (align, offset) = Position::BottomRight.anchor();
        assert_eq!(align, egui::Align2::RIGHT_BOTTOM);
        assert!(offset.x < 0.0 && offset.y < 0.0);
    }
}
