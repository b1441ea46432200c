//! `wherenow` - where you are, what the weather is, and what time it is there
//!
//! This library provides the three lookups behind the `wherenow` binary:
//! IP geolocation, current weather and a timezone-offset local time
//! estimate, plus the orchestration that prints them.

pub mod api;
pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod local_time;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod weather;

// Re-export core types for public API
pub use api::ApiClient;
pub use app::App;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use error::WhereNowError;
pub use local_time::{LocalTimeResolver, apply_offsets};
pub use location_resolver::LocationResolver;
pub use models::{Location, TimezoneOffsets, Weather};
pub use weather::WeatherResolver;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WhereNowError>;
