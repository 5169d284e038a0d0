//! Signal extraction: raw per-request inputs to a [`VisitorContext`].
//!
//! Geo and travel values are computed upstream and arrive as loosely-typed
//! header strings. Anything missing or garbled becomes `None`; extraction
//! never fails.

use chrono::{DateTime, Datelike, Timelike, Utc};
use frontdesk_core::{PracticeConfig, TravelInfo, TravelMode, VisitorContext, VisitorStatus};
use percent_encoding::percent_decode_str;

use crate::classify::{office_open, time_of_day};

const MAX_CITY_LEN: usize = 64;
const MAX_TRAVEL_FIELD_LEN: usize = 32;

/// Raw signals for one request, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSignals {
    /// URL-encoded city name from the geo header.
    pub city: Option<String>,
    pub travel_mode: Option<String>,
    pub travel_time: Option<String>,
    pub travel_distance: Option<String>,
    /// Value of the `visit_count` cookie.
    pub visit_count: Option<String>,
    pub now: DateTime<Utc>,
}

impl RawSignals {
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }
}

/// Builds a well-formed [`VisitorContext`] from raw signals.
#[must_use]
pub fn extract(raw: &RawSignals, practice: &PracticeConfig) -> VisitorContext {
    let local = raw.now.with_timezone(&practice.timezone);
    let hour = local.hour();

    VisitorContext {
        city: raw.city.as_deref().and_then(parse_city),
        travel: parse_travel(raw),
        time_of_day: time_of_day(hour),
        office_open: office_open(&practice.hours, local.weekday(), hour),
        visitor_status: parse_visitor_status(raw.visit_count.as_deref()),
    }
}

fn parse_city(raw: &str) -> Option<String> {
    let Ok(decoded) = percent_decode_str(raw).decode_utf8() else {
        tracing::debug!(raw, "dropping city header with invalid utf-8 encoding");
        return None;
    };
    let city = decoded.trim();
    if city.is_empty() {
        return None;
    }
    if city.chars().count() > MAX_CITY_LEN || city.chars().any(char::is_control) {
        tracing::debug!(raw, "dropping garbled city header");
        return None;
    }
    Some(city.to_string())
}

/// Parses a travel mode, accepting a few common aliases.
pub(crate) fn parse_travel_mode(raw: &str) -> Option<TravelMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "driving" | "drive" | "car" => Some(TravelMode::Driving),
        "walking" | "walk" => Some(TravelMode::Walking),
        "transit" | "public" | "bus" | "train" => Some(TravelMode::Transit),
        _ => None,
    }
}

fn parse_travel_field(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    let well_formed = !value.is_empty()
        && value.chars().count() <= MAX_TRAVEL_FIELD_LEN
        && value.chars().any(|c| c.is_ascii_digit())
        && !value.chars().any(char::is_control);
    well_formed.then(|| value.to_string())
}

/// All three travel fields must parse, otherwise none are surfaced.
fn parse_travel(raw: &RawSignals) -> Option<TravelInfo> {
    let any_present =
        raw.travel_mode.is_some() || raw.travel_time.is_some() || raw.travel_distance.is_some();

    let mode = raw.travel_mode.as_deref().and_then(parse_travel_mode);
    let time = parse_travel_field(raw.travel_time.as_deref());
    let distance = parse_travel_field(raw.travel_distance.as_deref());

    match (mode, time, distance) {
        (Some(mode), Some(time), Some(distance)) => Some(TravelInfo {
            mode,
            time,
            distance,
        }),
        _ => {
            if any_present {
                tracing::debug!("dropping incomplete travel signal");
            }
            None
        }
    }
}

/// Parses a `visit_count` cookie value. Digit strings too large for `u32`
/// saturate at `u32::MAX`; anything else is `None`.
#[must_use]
pub fn parse_visit_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let count = raw
        .parse::<u64>()
        .map_or(u32::MAX, |n| u32::try_from(n).unwrap_or(u32::MAX));
    Some(count)
}

fn parse_visitor_status(raw: Option<&str>) -> VisitorStatus {
    let count = raw.and_then(parse_visit_count).unwrap_or(0);
    match count {
        0..=1 => VisitorStatus::New,
        2..=4 => VisitorStatus::Returning,
        _ => VisitorStatus::Frequent,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use frontdesk_core::TimeOfDay;

    use super::*;

    /// 2026-10-14 is a Wednesday. 21:00 UTC the day before is 08:00 Wednesday
    /// in Sydney daylight time (UTC+11).
    fn wednesday_8am_local() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 13, 21, 0, 0).unwrap()
    }

    fn full_raw() -> RawSignals {
        RawSignals {
            city: Some("North%20Sydney".to_string()),
            travel_mode: Some("driving".to_string()),
            travel_time: Some("12 mins".to_string()),
            travel_distance: Some("8.4 km".to_string()),
            visit_count: Some("3".to_string()),
            now: wednesday_8am_local(),
        }
    }

    #[test]
    fn extracts_all_fields() {
        let ctx = extract(&full_raw(), &PracticeConfig::default());
        assert_eq!(ctx.city.as_deref(), Some("North Sydney"));
        let travel = ctx.travel.expect("travel present");
        assert_eq!(travel.mode, TravelMode::Driving);
        assert_eq!(travel.time, "12 mins");
        assert_eq!(travel.distance, "8.4 km");
        assert_eq!(ctx.time_of_day, TimeOfDay::Morning);
        assert!(ctx.office_open);
        assert_eq!(ctx.visitor_status, VisitorStatus::Returning);
    }

    #[test]
    fn missing_everything_yields_neutral_context() {
        let ctx = extract(
            &RawSignals::at(wednesday_8am_local()),
            &PracticeConfig::default(),
        );
        assert!(ctx.city.is_none());
        assert!(ctx.travel.is_none());
        assert_eq!(ctx.visitor_status, VisitorStatus::New);
    }

    #[test]
    fn partial_travel_is_dropped_entirely() {
        let raw = RawSignals {
            travel_distance: None,
            ..full_raw()
        };
        assert!(extract(&raw, &PracticeConfig::default()).travel.is_none());
    }

    #[test]
    fn unknown_travel_mode_drops_travel() {
        let raw = RawSignals {
            travel_mode: Some("teleport".to_string()),
            ..full_raw()
        };
        assert!(extract(&raw, &PracticeConfig::default()).travel.is_none());
    }

    #[test]
    fn travel_time_without_digits_is_garbled() {
        let raw = RawSignals {
            travel_time: Some("soon".to_string()),
            ..full_raw()
        };
        assert!(extract(&raw, &PracticeConfig::default()).travel.is_none());
    }

    #[test]
    fn travel_mode_aliases() {
        assert_eq!(parse_travel_mode("CAR"), Some(TravelMode::Driving));
        assert_eq!(parse_travel_mode(" walk "), Some(TravelMode::Walking));
        assert_eq!(parse_travel_mode("train"), Some(TravelMode::Transit));
        assert_eq!(parse_travel_mode(""), None);
    }

    #[test]
    fn invalid_percent_encoding_drops_city() {
        assert!(parse_city("%FF%FE").is_none());
    }

    #[test]
    fn overlong_city_is_dropped() {
        assert!(parse_city(&"a".repeat(MAX_CITY_LEN + 1)).is_none());
        assert!(parse_city(&"a".repeat(MAX_CITY_LEN)).is_some());
    }

    #[test]
    fn control_characters_in_city_are_dropped() {
        assert!(parse_city("Bondi%0AJunction").is_none());
    }

    #[test]
    fn visit_count_thresholds() {
        assert_eq!(parse_visitor_status(None), VisitorStatus::New);
        assert_eq!(parse_visitor_status(Some("abc")), VisitorStatus::New);
        assert_eq!(parse_visitor_status(Some("1")), VisitorStatus::New);
        assert_eq!(parse_visitor_status(Some("2")), VisitorStatus::Returning);
        assert_eq!(parse_visitor_status(Some("4")), VisitorStatus::Returning);
        assert_eq!(parse_visitor_status(Some("5")), VisitorStatus::Frequent);
        assert_eq!(parse_visitor_status(Some("-3")), VisitorStatus::New);
    }

    #[test]
    fn huge_visit_counts_saturate_to_frequent() {
        assert_eq!(parse_visit_count("4294967296"), Some(u32::MAX));
        assert_eq!(parse_visit_count("99999999999999999999999"), Some(u32::MAX));
        assert_eq!(parse_visit_count(" 12 "), Some(12));
        assert_eq!(parse_visit_count("12x"), None);
        assert_eq!(
            parse_visitor_status(Some("99999999999999999999999")),
            VisitorStatus::Frequent
        );
    }

    #[test]
    fn clock_is_shifted_into_practice_timezone() {
        // 09:30 UTC on Friday is 20:30 Friday in Sydney daylight time.
        let raw = RawSignals::at(Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap());
        let ctx = extract(&raw, &PracticeConfig::default());
        assert_eq!(ctx.time_of_day, TimeOfDay::Evening);
        assert!(!ctx.office_open);

        let utc_practice = PracticeConfig {
            timezone: chrono_tz::UTC,
            ..PracticeConfig::default()
        };
        let ctx = extract(&raw, &utc_practice);
        assert_eq!(ctx.time_of_day, TimeOfDay::Morning);
        assert!(ctx.office_open);
    }

    fn monday_opening(day: u32, month: u32) -> VisitorContext {
        // 21:30 UTC Sunday is Monday 07:30 in AEST and 08:30 in AEDT.
        let raw = RawSignals::at(Utc.with_ymd_and_hms(2026, month, day, 21, 30, 0).unwrap());
        extract(&raw, &PracticeConfig::default())
    }

    #[test]
    fn daylight_saving_start_shifts_opening_hour() {
        // Sydney moves to UTC+11 on 2026-10-04.
        assert!(!monday_opening(27, 9).office_open, "Mon 07:30 AEST");
        let after = monday_opening(18, 10);
        assert!(after.office_open, "Mon 08:30 AEDT");
        assert_eq!(after.time_of_day, TimeOfDay::Morning);
    }

    #[test]
    fn daylight_saving_end_shifts_opening_hour() {
        // Sydney returns to UTC+10 on 2026-04-05.
        assert!(monday_opening(29, 3).office_open, "Mon 08:30 AEDT");
        assert!(!monday_opening(5, 4).office_open, "Mon 07:30 AEST");
    }
}
