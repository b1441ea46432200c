//! Timezone offset data returned by the timezone lookup

use serde::{Deserialize, Serialize};

/// Offsets for a coordinate at a given instant, all in seconds
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimezoneOffsets {
    /// Timezone identifier, display only
    #[serde(default)]
    pub timezone: String,
    /// Offset from UTC without daylight saving
    pub raw_offset: i64,
    /// Daylight-saving offset. Decoded but not applied to the local time.
    #[serde(default)]
    pub dst_offset: i64,
    #[serde(default)]
    pub time_offset: i64,
}

impl TimezoneOffsets {
    /// Seconds added to UTC to approximate local time, `None` on overflow
    #[must_use]
    pub fn applied_offset(&self) -> Option<i64> {
        self.raw_offset.checked_add(self.time_offset)
    }
}
