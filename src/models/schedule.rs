use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// An `[hour, minute]` pair as published by the legacy controller.
///
/// Rendered without zero padding (`6:5`, not `06:05`) because the
/// downstream consumer expects the exact strings the legacy system has
/// always produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePair {
    pub hour: u32,
    pub minute: u32,
}

impl TimePair {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for TimePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hour, self.minute)
    }
}

impl<'de> Deserialize<'de> for TimePair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts = Vec::<u32>::deserialize(deserializer)?;

        match parts.as_slice() {
            [hour, minute] => Ok(TimePair::new(*hour, *minute)),
            _ => Err(de::Error::invalid_length(
                parts.len(),
                &"a [hour, minute] pair",
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyEntry {
    pub from: TimePair,
    pub to: TimePair,
    pub temp: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyOverride {
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub start: Vec<u32>,
    #[serde(default)]
    pub temp: f64,
}

/// The upstream schedule document. Absent fields decode to their
/// defaults, matching the lenient decoding of the legacy publisher.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacySchedule {
    /// Unused by the bridge; kept for forward compatibility.
    #[serde(default)]
    pub week: Vec<i32>,
    #[serde(default, rename = "override")]
    pub override_: LegacyOverride,
    #[serde(default)]
    pub work: Vec<LegacyEntry>,
    #[serde(default)]
    pub free: Vec<LegacyEntry>,
    #[serde(default)]
    pub other: f64,
}

impl LegacySchedule {
    /// Lenient decode. Some legacy publishers wrap the JSON document in
    /// an extra pair of enclosing bytes; a single layer of wrapping is
    /// stripped, and only when the raw payload does not parse on its
    /// own. The raw parse error is reported when both attempts fail.
    pub fn from_payload(payload: &[u8]) -> Result<Self, ScheduleError> {
        match serde_json::from_slice(payload) {
            Ok(schedule) => Ok(schedule),
            Err(raw_err) => {
                if payload.len() >= 2 {
                    if let Ok(schedule) = serde_json::from_slice(&payload[1..payload.len() - 1]) {
                        return Ok(schedule);
                    }
                }
                Err(ScheduleError::Decode(raw_err))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub from: String,
    pub to: String,
    pub temperature: f64,
}

/// The normalized schedule expected by the downstream controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub workday: Vec<DayEntry>,
    pub freeday: Vec<DayEntry>,
    #[serde(rename = "defaultTemperature")]
    pub default_temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_pair_renders_without_padding() {
        assert_eq!(TimePair::new(6, 5).to_string(), "6:5");
        assert_eq!(TimePair::new(14, 30).to_string(), "14:30");
        assert_eq!(TimePair::new(0, 0).to_string(), "0:0");
    }

    #[test]
    fn test_decode_full_document() {
        let payload = br#"{
            "week": [1, 1, 1, 1, 1, 0, 0],
            "override": {"duration": 60, "start": [7, 0], "temp": 21.5},
            "work": [{"from": [6, 0], "to": [8, 30], "temp": 21.0}],
            "free": [{"from": [8, 0], "to": [22, 0], "temp": 20.0}],
            "other": 18.0
        }"#;

        let schedule = LegacySchedule::from_payload(payload).unwrap();
        assert_eq!(schedule.override_.temp, 21.5);
        assert_eq!(schedule.work.len(), 1);
        assert_eq!(schedule.work[0].from, TimePair::new(6, 0));
        assert_eq!(schedule.free[0].to, TimePair::new(22, 0));
        assert_eq!(schedule.other, 18.0);
    }

    #[test]
    fn test_decode_tolerates_absent_fields() {
        let schedule = LegacySchedule::from_payload(br#"{"other": 17.5}"#).unwrap();
        assert!(schedule.week.is_empty());
        assert!(schedule.work.is_empty());
        assert_eq!(schedule.override_.temp, 0.0);
        assert_eq!(schedule.other, 17.5);
    }

    #[test]
    fn test_decode_strips_one_wrapping_layer() {
        let wrapped = br#""{"other": 16.0, "work": [], "free": []}""#;
        let schedule = LegacySchedule::from_payload(wrapped).unwrap();
        assert_eq!(schedule.other, 16.0);
    }

    #[test]
    fn test_decode_rejects_short_time_pair() {
        let payload = br#"{"work": [{"from": [6], "to": [8, 0], "temp": 21.0}]}"#;
        let err = LegacySchedule::from_payload(payload).unwrap_err();
        assert!(matches!(err, ScheduleError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(LegacySchedule::from_payload(b"not json").is_err());
        assert!(LegacySchedule::from_payload(b"").is_err());
        assert!(LegacySchedule::from_payload(b"x").is_err());
    }
}
