//! Background tile layer definitions.
//!
//! A [`TileLayer`] only describes a tile source (URL template, attribution,
//! subdomain rotation); fetching and drawing the raster imagery is the map
//! display's concern.

/// A background tile layer selectable in the layer switcher
#[derive(Debug, Clone)]
pub struct TileLayer {
    name: String,
    url_template: String,
    attribution: String,
    subdomains: Vec<&'static str>,
}

impl TileLayer {
    /// Creates a tile layer from a `{s}/{z}/{x}/{y}` URL template.
    pub fn new(
        name: impl Into<String>,
        url_template: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            attribution: attribution.into(),
            subdomains: vec!["a", "b", "c"],
        }
    }

    /// Default OpenStreetMap basemap
    pub fn openstreetmap() -> Self {
        Self::new(
            "Basemap",
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            "© OpenStreetMap contributors",
        )
    }

    /// OpenTopoMap street/terrain basemap
    pub fn opentopomap() -> Self {
        Self::new(
            "Street Map",
            "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            "© OpenTopoMap contributors",
        )
    }

    /// Display name shown in the layer switcher
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribution text for the active basemap
    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    /// Build the URL for one tile, rotating subdomains so requests spread
    /// across the server's aliases.
    pub fn tile_url(&self, z: u32, x: u32, y: u32) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            self.subdomains[((x + y) % self.subdomains.len() as u32) as usize]
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_expansion() {
        let layer = TileLayer::openstreetmap();
        let url = layer.tile_url(5, 8, 12);

        // (8 + 12) % 3 == 2 -> subdomain "c"
        assert_eq!(url, "https://c.tile.openstreetmap.org/5/8/12.png");
    }

    #[test]
    fn test_subdomain_rotation() {
        let layer = TileLayer::openstreetmap();
        assert!(layer.tile_url(1, 0, 0).starts_with("https://a."));
        assert!(layer.tile_url(1, 1, 0).starts_with("https://b."));
        assert!(layer.tile_url(1, 1, 1).starts_with("https://c."));
    }

    #[test]
    fn test_default_basemaps() {
        assert_eq!(TileLayer::openstreetmap().name(), "Basemap");
        assert_eq!(TileLayer::opentopomap().name(), "Street Map");
        assert!(TileLayer::opentopomap()
            .attribution()
            .contains("OpenTopoMap"));
    }
}
