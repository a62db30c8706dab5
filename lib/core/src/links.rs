//! Builders for the external URLs a mosque page links to.

/// Zoom level used for the embedded map unless configured otherwise.
pub const DEFAULT_MAP_ZOOM: u8 = 16;

/// Resolves a relative asset path against the asset base URL.
///
/// This is plain concatenation: the base is expected to carry its own
/// trailing separator.
#[must_use]
pub fn asset_url(base: &str, photo: &str) -> String {
    format!("{base}{photo}")
}

/// Builds the map embed URL for a coordinate pair.
///
/// Coordinates are not range-checked.
#[must_use]
pub fn map_embed_url(latitude: f64, longitude: f64, zoom: u8) -> String {
    format!("https://maps.google.com/maps?q={latitude},{longitude}&z={zoom}&output=embed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_concatenates() {
        assert_eq!(
            asset_url("https://sia.gov.ae/directus/assets/", "abc.jpg"),
            "https://sia.gov.ae/directus/assets/abc.jpg"
        );
    }

    #[test]
    fn map_url_contains_coordinates() {
        let url = map_embed_url(25.2, 55.3, DEFAULT_MAP_ZOOM);
        assert!(url.contains("q=25.2,55.3"));
        assert!(url.contains("z=16"));
        assert!(url.ends_with("&output=embed"));
    }

    #[test]
    fn map_url_passes_out_of_range_values_through() {
        let url = map_embed_url(-91.5, 200.0, 3);
        assert!(url.contains("q=-91.5,200&z=3"));
    }
}
