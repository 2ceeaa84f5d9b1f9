//! Static depth legend built from the style resolver's band table.

use crate::style::DEPTH_BANDS;

/// One legend row: a color swatch and its depth range label
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
}

/// Ordered color key for the depth bands. Built once at startup and never
/// mutated; sharing [`DEPTH_BANDS`] with the resolver keeps the Nth swatch
/// equal to the color the resolver returns for any depth in the Nth band.
#[derive(Debug, Clone)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// Builds the depth legend. Each label spans this band's lower bound to
    /// the next band's, en-dash separated; the open-ended final band gets a
    /// `+` suffix.
    pub fn depth_bands() -> Self {
        let mut entries = Vec::with_capacity(DEPTH_BANDS.len());
        for (i, band) in DEPTH_BANDS.iter().enumerate() {
            let label = match DEPTH_BANDS.get(i + 1) {
                Some(next) => format!("{}\u{2013}{}", band.lower, next.lower),
                None => format!("{}+", band.lower),
            };
            entries.push(LegendEntry {
                color: band.color,
                label,
            });
        }
        Self { entries }
    }

    /// Entries in display order, shallowest band first
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Panel heading
    pub fn title(&self) -> &'static str {
        "Depth (km)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::color_for_depth;

    #[test]
    fn test_six_entries_in_order() {
        let legend = Legend::depth_bands();
        let labels: Vec<&str> = legend.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "-10\u{2013}10",
                "10\u{2013}30",
                "30\u{2013}50",
                "50\u{2013}70",
                "70\u{2013}90",
                "90+"
            ]
        );
    }

    #[test]
    fn test_legend_colors_match_resolver() {
        // Sample a depth inside each band and check the swatch agrees
        let legend = Legend::depth_bands();
        let samples = [5.0, 20.0, 40.0, 60.0, 80.0, 120.0];

        for (entry, depth) in legend.entries().iter().zip(samples) {
            assert_eq!(entry.color, color_for_depth(depth));
        }
    }

    #[test]
    fn test_legend_colors_match_band_table() {
        let legend = Legend::depth_bands();
        for (entry, band) in legend.entries().iter().zip(DEPTH_BANDS.iter()) {
            assert_eq!(entry.color, band.color);
        }
    }
}
