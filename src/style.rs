//! Feature style resolution for earthquake markers.
//!
//! Pure functions from event depth and magnitude to visual style. The band
//! thresholds live in one ordered table so the legend and the resolver can
//! never disagree on colors.

/// One depth band. Events strictly deeper than `lower` (up to the next
/// band's lower bound) take `color`; the deepest band is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBand {
    /// Lower bound in kilometers. Inclusive for the band below it: an event
    /// exactly on a boundary resolves to the shallower band.
    pub lower: f64,
    pub color: &'static str,
}

/// Depth bands in ascending order, lightest to darkest.
pub const DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand { lower: -10.0, color: "#a3f600" },
    DepthBand { lower: 10.0, color: "#dcf400" },
    DepthBand { lower: 30.0, color: "#f7db11" },
    DepthBand { lower: 50.0, color: "#fdb72a" },
    DepthBand { lower: 70.0, color: "#fca35d" },
    DepthBand { lower: 90.0, color: "#ff5f65" },
];

/// Radius for a magnitude-zero event, which is a valid recorded event and
/// must not render as an invisible zero-size marker.
pub const MIN_RADIUS: f64 = 1.0;

const MARKER_STROKE_COLOR: &str = "#000000";
const PLATE_COLOR: &str = "#ffa500";

/// Stroke and fill parameters for a rendered shape
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    /// Stroke color
    pub color: &'static str,
    pub fill_color: &'static str,
    /// Display radius in pixels; only meaningful for circle markers
    pub radius: f64,
    /// Stroke weight in pixels
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub stroke: bool,
}

/// Resolves a depth in kilometers to its band color.
///
/// Scans the band table from the deepest band down and takes the first band
/// the depth is strictly above, so boundary values resolve to the shallower
/// band. Depths above sea level (below the first bound) take the first band.
pub fn color_for_depth(depth: f64) -> &'static str {
    for band in DEPTH_BANDS.iter().rev() {
        if depth > band.lower {
            return band.color;
        }
    }
    DEPTH_BANDS[0].color
}

/// Resolves a magnitude to a display radius in pixels.
///
/// Linear in magnitude, except exactly zero maps to [`MIN_RADIUS`].
/// Negative magnitudes pass through the linear formula unclamped; that is
/// the recorded behavior for micro-events, not a validation gap to fix here.
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    if magnitude == 0.0 {
        MIN_RADIUS
    } else {
        magnitude * 4.0
    }
}

/// Full style for one earthquake point
pub fn earthquake_style(depth: f64, magnitude: f64) -> PathStyle {
    PathStyle {
        color: MARKER_STROKE_COLOR,
        fill_color: color_for_depth(depth),
        radius: radius_for_magnitude(magnitude),
        weight: 0.5,
        opacity: 1.0,
        fill_opacity: 1.0,
        stroke: true,
    }
}

/// Fixed style shared by every plate boundary line
pub fn plate_style() -> PathStyle {
    PathStyle {
        color: PLATE_COLOR,
        fill_color: PLATE_COLOR,
        radius: 0.0,
        weight: 2.0,
        opacity: 1.0,
        fill_opacity: 0.0,
        stroke: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_band_assignment() {
        assert_eq!(color_for_depth(5.0), "#a3f600");
        assert_eq!(color_for_depth(20.0), "#dcf400");
        assert_eq!(color_for_depth(40.0), "#f7db11");
        assert_eq!(color_for_depth(60.0), "#fdb72a");
        assert_eq!(color_for_depth(80.0), "#fca35d");
        assert_eq!(color_for_depth(95.0), "#ff5f65");
    }

    #[test]
    fn test_boundary_depths_resolve_to_lower_band() {
        assert_eq!(color_for_depth(10.0), "#a3f600");
        assert_eq!(color_for_depth(30.0), "#dcf400");
        assert_eq!(color_for_depth(50.0), "#f7db11");
        assert_eq!(color_for_depth(70.0), "#fdb72a");
        assert_eq!(color_for_depth(90.0), "#fca35d");
        assert_eq!(color_for_depth(10.01), "#dcf400");
    }

    #[test]
    fn test_above_sea_level_depth() {
        // Shallower than the first bound still lands in the first band
        assert_eq!(color_for_depth(-10.0), "#a3f600");
        assert_eq!(color_for_depth(-25.0), "#a3f600");
    }

    #[test]
    fn test_radius_formula() {
        assert_eq!(radius_for_magnitude(0.0), 1.0);
        assert_eq!(radius_for_magnitude(6.5), 26.0);
        assert_eq!(radius_for_magnitude(1.0), 4.0);
        // Negative magnitudes pass through unclamped (current behavior)
        assert_eq!(radius_for_magnitude(-1.0), -4.0);
    }

    #[test]
    fn test_earthquake_style() {
        let style = earthquake_style(5.0, 0.0);
        assert_eq!(style.fill_color, "#a3f600");
        assert_eq!(style.radius, 1.0);
        assert_eq!(style.color, "#000000");
        assert_eq!(style.weight, 0.5);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.fill_opacity, 1.0);
        assert!(style.stroke);

        let deep = earthquake_style(95.0, 6.5);
        assert_eq!(deep.fill_color, "#ff5f65");
        assert_eq!(deep.radius, 26.0);
    }

    #[test]
    fn test_plate_style() {
        let style = plate_style();
        assert_eq!(style.color, "#ffa500");
        assert_eq!(style.weight, 2.0);
        assert_eq!(style.fill_opacity, 0.0);
    }
}
