//! Formatos de fecha y hora de la agenda
//!
//! La agenda trabaja con fechas `dd/mm/yyyy` y horarios `HH:MM`. Estos
//! newtypes encapsulan el parseo y la serialización para que el resto del
//! código compare valores tipados y no strings.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DAY_FORMAT: &str = "%d/%m/%Y";
const ISO_DAY_FORMAT: &str = "%Y-%m-%d";
const CLOCK_FORMAT: &str = "%H:%M";
const CLOCK_WITH_SECONDS_FORMAT: &str = "%H:%M:%S";

/// Día de una programación (precisión de día)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleDate(pub NaiveDate);

impl ScheduleDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl fmt::Display for ScheduleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for ScheduleDate {
    type Err = String;

    /// Acepta `dd/mm/yyyy` y, como alternativa, la forma ISO `yyyy-mm-dd`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, DAY_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(s, ISO_DAY_FORMAT))
            .map(Self)
            .map_err(|_| format!("invalid date '{}', expected DD/MM/YYYY", s))
    }
}

impl Serialize for ScheduleDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScheduleDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Horario de una programación (precisión de minuto)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(pub NaiveTime);

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CLOCK_FORMAT))
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, CLOCK_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(s, CLOCK_WITH_SECONDS_FORMAT))
            .ok()
            // los segundos no forman parte del horario
            .and_then(|t| Self::from_hm(t.hour(), t.minute()))
            .ok_or_else(|| format!("invalid time '{}', expected HH:MM", s))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Distingue un campo ausente (`None`) de un `null` explícito (`Some(None)`)
/// en las actualizaciones parciales.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_date_accepts_both_formats() {
        let br: ScheduleDate = "24/11/2025".parse().unwrap();
        let iso: ScheduleDate = "2025-11-24".parse().unwrap();
        assert_eq!(br, iso);
        assert_eq!(br.to_string(), "24/11/2025");
        assert!("31/02/2025".parse::<ScheduleDate>().is_err());
    }

    #[test]
    fn test_clock_time_drops_seconds() {
        let time: ClockTime = "08:00:45".parse().unwrap();
        assert_eq!(time, ClockTime::from_hm(8, 0).unwrap());
        assert_eq!(time.to_string(), "08:00");
        assert!("25:00".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_serde_uses_display_format() {
        let date = ScheduleDate::from_ymd(2025, 11, 24).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"24/11/2025\"");
        let time: ClockTime = serde_json::from_str("\"14:30\"").unwrap();
        assert_eq!(time, ClockTime::from_hm(14, 30).unwrap());
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        time: Option<Option<ClockTime>>,
    }

    #[test]
    fn test_double_option_distinguishes_null_from_absent() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.time, None);
        let cleared: Patch = serde_json::from_str(r#"{"time": null}"#).unwrap();
        assert_eq!(cleared.time, Some(None));
        let set: Patch = serde_json::from_str(r#"{"time": "09:00"}"#).unwrap();
        assert_eq!(set.time, Some(ClockTime::from_hm(9, 0)));
    }
}
