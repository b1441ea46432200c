//! Runs the three lookups in order and writes the report

use crate::api::ApiClient;
use crate::clock::Clock;
use crate::config::AppConfig;
use crate::local_time::LocalTimeResolver;
use crate::location_resolver::LocationResolver;
use crate::models::{Location, Weather};
use crate::weather::WeatherResolver;
use crate::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::io::Write;
use tracing::info;

/// `Your current location: <city>, <country>`
#[must_use]
pub fn location_line(location: &Location) -> String {
    format!("Your current location: {}", location.format_place())
}

/// `Current weather: <temp>°C, <condition>`
#[must_use]
pub fn weather_line(weather: &Weather) -> String {
    format!(
        "Current weather: {}, {}",
        weather.format_temperature(),
        weather.text
    )
}

/// `Local time: <RFC 3339 timestamp>`
#[must_use]
pub fn local_time_line(local_time: &DateTime<Utc>) -> String {
    format!(
        "Local time: {}",
        local_time.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

pub struct App<C> {
    api_client: ApiClient,
    location: LocationResolver,
    weather: WeatherResolver,
    local_time: LocalTimeResolver<C>,
}

impl<C: Clock> App<C> {
    /// Build the resolvers. Fails before any request if a key is missing.
    pub fn new(config: &AppConfig, api_client: ApiClient, clock: C) -> Result<Self> {
        config.require_keys()?;

        Ok(Self {
            api_client,
            location: LocationResolver::new(&config.location),
            weather: WeatherResolver::new(&config.weather)?,
            local_time: LocalTimeResolver::new(&config.timezone, clock)?,
        })
    }

    /// Write one line per lookup as it completes; stop at the first failure.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let location = self.location.resolve(&self.api_client).await?;
        writeln!(out, "{}", location_line(&location))?;

        let weather = self
            .weather
            .current_weather(&self.api_client, location.latitude, location.longitude)
            .await?;
        writeln!(out, "{}", weather_line(&weather))?;

        let local_time = self
            .local_time
            .local_time(&self.api_client, location.latitude, location.longitude)
            .await?;
        writeln!(out, "{}", local_time_line(&local_time))?;

        out.flush()?;
        info!("Report complete for {}", location.format_place());
        Ok(())
    }
}
