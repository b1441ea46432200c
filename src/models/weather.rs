//! Weather observation model and display methods

use serde::{Deserialize, Serialize};

/// Current weather observation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Weather {
    /// Temperature in Celsius
    pub temp_c: f64,
    /// Human-readable description of weather conditions
    pub text: String,
}

impl Weather {
    #[must_use]
    pub fn new(temp_c: f64, text: String) -> Self {
        Self { temp_c, text }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temp_c)
    }
}
