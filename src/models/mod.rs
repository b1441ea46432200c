//! Data models for `wherenow`
//!
//! Immutable value records produced by the three lookups:
//! - Location: city, country and coordinates of the caller
//! - Weather: current temperature and condition text
//! - Timezone: offsets used to approximate local time

pub mod location;
pub mod timezone;
pub mod weather;

// Re-export all public types for convenient access
pub use location::Location;
pub use timezone::TimezoneOffsets;
pub use weather::Weather;
