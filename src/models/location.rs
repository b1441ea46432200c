//! Location model for the caller's approximate position

use serde::{Deserialize, Serialize};

/// Approximate location derived from the caller's public address
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// City name
    pub city: String,
    /// Country name
    pub country: String,
    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(city: String, country: String, latitude: f64, longitude: f64) -> Self {
        Self {
            city,
            country,
            latitude,
            longitude,
        }
    }

    /// Format location as "city, country"
    #[must_use]
    pub fn format_place(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
