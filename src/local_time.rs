//! Local time estimate from a timezone lookup
//!
//! Local time is approximated by adding `raw_offset + time_offset` seconds to
//! the current UTC instant. `dst_offset` is decoded but not applied and no
//! timezone database is consulted.

use crate::api::ApiClient;
use crate::clock::Clock;
use crate::config::TimezoneConfig;
use crate::models::TimezoneOffsets;
use crate::{Result, WhereNowError};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, instrument};

/// Service for resolving an approximate local time for a coordinate
#[derive(Debug, Clone)]
pub struct LocalTimeResolver<C> {
    base_url: String,
    api_key: String,
    clock: C,
}

impl<C: Clock> LocalTimeResolver<C> {
    /// Fails when no API key is configured
    pub fn new(config: &TimezoneConfig, clock: C) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key()?.to_string(),
            clock,
        })
    }

    #[must_use]
    pub fn request_url(&self, lat: f64, lon: f64, now: DateTime<Utc>) -> String {
        format!(
            "{}/json?location={:.6},{:.6}&timestamp={}&key={}",
            self.base_url,
            lat,
            lon,
            now.timestamp(),
            urlencoding::encode(&self.api_key)
        )
    }

    /// Look up the offsets for `lat`/`lon` and apply them to the current instant.
    ///
    /// The clock is read once; the same instant is sent as the request
    /// timestamp and used for the arithmetic.
    #[instrument(skip(self, api_client))]
    pub async fn local_time(&self, api_client: &ApiClient, lat: f64, lon: f64) -> Result<DateTime<Utc>> {
        let now = self.clock.now();

        let offsets: TimezoneOffsets = api_client
            .get_json(&self.request_url(lat, lon, now), "timezone")
            .await?;

        debug!(
            "Timezone '{}': raw {}s, dst {}s (ignored), time {}s",
            offsets.timezone, offsets.raw_offset, offsets.dst_offset, offsets.time_offset
        );

        apply_offsets(now, &offsets)
    }
}

/// `now + raw_offset + time_offset`, ignoring `dst_offset`
pub fn apply_offsets(now: DateTime<Utc>, offsets: &TimezoneOffsets) -> Result<DateTime<Utc>> {
    offsets
        .applied_offset()
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or(WhereNowError::OffsetOutOfRange {
            raw_offset: offsets.raw_offset,
            time_offset: offsets.time_offset,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;
    use rstest::rstest;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap()
    }

    fn offsets(raw_offset: i64, dst_offset: i64, time_offset: i64) -> TimezoneOffsets {
        TimezoneOffsets {
            timezone: "Asia/Kolkata".to_string(),
            raw_offset,
            dst_offset,
            time_offset,
        }
    }

    #[rstest]
    #[case(0)]
    #[case(3600)]
    #[case(-3600)]
    fn test_dst_offset_is_not_applied(#[case] dst_offset: i64) {
        let local = apply_offsets(instant(), &offsets(19800, dst_offset, 0)).unwrap();
        assert_eq!(local, instant() + TimeDelta::seconds(19800));
    }

    #[rstest]
    #[case(-18000, 0, -18000)]
    #[case(3600, 1800, 5400)]
    #[case(0, -60, -60)]
    fn test_raw_and_time_offsets_are_summed(
        #[case] raw_offset: i64,
        #[case] time_offset: i64,
        #[case] expected: i64,
    ) {
        let local = apply_offsets(instant(), &offsets(raw_offset, 7200, time_offset)).unwrap();
        assert_eq!(local - instant(), TimeDelta::seconds(expected));
    }

    #[test]
    fn test_overflowing_offset_is_an_error() {
        let err = apply_offsets(instant(), &offsets(i64::MAX, 0, 1)).unwrap_err();
        assert!(matches!(
            err,
            WhereNowError::OffsetOutOfRange {
                raw_offset: i64::MAX,
                time_offset: 1
            }
        ));

        let err = apply_offsets(instant(), &offsets(i64::MAX / 2, 0, 0)).unwrap_err();
        assert!(matches!(err, WhereNowError::OffsetOutOfRange { .. }));
    }

    #[test]
    fn test_request_url_uses_clock_timestamp() {
        let resolver = LocalTimeResolver::new(
            &TimezoneConfig {
                api_key: Some("tz-key".to_string()),
                base_url: "https://maps.googleapis.com/maps/api/timezone".to_string(),
            },
            FixedClock(instant()),
        )
        .unwrap();

        assert_eq!(
            resolver.request_url(26.9124, 75.7873, instant()),
            format!(
                "https://maps.googleapis.com/maps/api/timezone/json?location=26.912400,75.787300&timestamp={}&key=tz-key",
                instant().timestamp()
            )
        );
    }

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        let err = LocalTimeResolver::new(&TimezoneConfig::default(), FixedClock(instant())).unwrap_err();
        assert!(matches!(err, WhereNowError::Config { .. }));
    }
}
