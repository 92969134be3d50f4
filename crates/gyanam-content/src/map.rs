//! School location and the outbound map links derived from it.

use serde::{Deserialize, Serialize};

/// Latitude of the campus.
pub const DEFAULT_LAT: f64 = 26.834968056242143;
/// Longitude of the campus.
pub const DEFAULT_LNG: f64 = 93.29706413922847;
/// Zoom level for the attribution link.
pub const DEFAULT_ZOOM: u8 = 15;

/// A point on the map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

impl Default for MapLocation {
    fn default() -> Self {
        Self {
            lat: DEFAULT_LAT,
            lng: DEFAULT_LNG,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapLocation {
    pub fn validate(&self) -> Result<(), String> {
        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lng) {
            return Err(format!(
                "map: coordinates out of range ({}, {})",
                self.lat, self.lng
            ));
        }
        Ok(())
    }

    /// External Google Maps link.
    pub fn google_maps_url(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lng)
    }

    /// Embeddable OpenStreetMap view with a marker, spanning 0.01 degrees each way.
    pub fn osm_embed_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={}%2C{}%2C{}%2C{}&layer=mapnik&marker={}%2C{}",
            self.lng - 0.01,
            self.lat - 0.01,
            self.lng + 0.01,
            self.lat + 0.01,
            self.lat,
            self.lng
        )
    }

    /// "View larger map" link for the embed.
    pub fn osm_attribution_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={}&mlon={}#map={}/{}/{}",
            self.lat, self.lng, self.zoom, self.lat, self.lng
        )
    }

    /// Coordinates rounded for display.
    pub fn display_coordinates(&self) -> String {
        format!("{:.6}, {:.6}", self.lat, self.lng)
    }
}
