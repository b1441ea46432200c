//! Current weather from weatherapi.com
//!
//! The forecast query is the configured place name. The coordinates passed
//! to [`WeatherResolver::current_weather`] do not reach the request.

use crate::api::ApiClient;
use crate::config::WeatherConfig;
use crate::models::Weather;
use crate::Result;
use tracing::{debug, instrument};

/// Service for resolving current weather
#[derive(Debug, Clone)]
pub struct WeatherResolver {
    base_url: String,
    api_key: String,
    query: String,
}

impl WeatherResolver {
    /// Fails when no API key is configured
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key()?.to_string(),
            query: config.query.clone(),
        })
    }

    /// URL of the forecast request. Independent of `lat`/`lon`.
    #[must_use]
    pub fn request_url(&self, _lat: f64, _lon: f64) -> String {
        format!(
            "{}/forecast.json?key={}&q={}&days=1&aqi=no&alerts=no",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.query)
        )
    }

    #[instrument(skip(self, api_client))]
    pub async fn current_weather(
        &self,
        api_client: &ApiClient,
        lat: f64,
        lon: f64,
    ) -> Result<Weather> {
        debug!("Querying weather for '{}'", self.query);

        let response: weatherapi::ForecastResponse = api_client
            .get_json(&self.request_url(lat, lon), "weather")
            .await?;

        let weather = Weather::from(response);
        debug!(
            "Current weather: {}, {}",
            weather.format_temperature(),
            weather.text
        );

        Ok(weather)
    }
}

/// weatherapi.com response structures
mod weatherapi {
    use crate::models::Weather;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: CurrentData,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        pub temp_c: f64,
        pub condition: Condition,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub text: String,
    }

    impl From<ForecastResponse> for Weather {
        fn from(response: ForecastResponse) -> Self {
            Weather::new(response.current.temp_c, response.current.condition.text)
        }
    }
}
