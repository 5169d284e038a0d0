//! Cohort classification: time-of-day buckets, office-open derivation, and
//! context normalization.

use chrono::Weekday;
use frontdesk_core::{Cohort, TimeOfDay, TravelInfo, VisitorContext, WeeklyHours};

/// Buckets a local hour (0..24) into a time of day.
///
/// `5..12` morning, `12..17` afternoon, `17..21` evening, everything else
/// night. Out-of-range hours fall into night.
#[must_use]
pub fn time_of_day(hour: u32) -> TimeOfDay {
    match hour {
        5..=11 => TimeOfDay::Morning,
        12..=16 => TimeOfDay::Afternoon,
        17..=20 => TimeOfDay::Evening,
        _ => TimeOfDay::Night,
    }
}

/// Whether the practice is open at `hour` local time on `day`.
///
/// Days without hours are always closed, and a short day is closed from its
/// closing hour onward regardless of the time-of-day bucket.
#[must_use]
pub fn office_open(hours: &WeeklyHours, day: Weekday, hour: u32) -> bool {
    hours.for_weekday(day).is_some_and(|h| h.contains(hour))
}

/// Normalizes a context and wraps it as a [`Cohort`].
///
/// Blank strings become `None`, and a travel estimate with a blank time or
/// distance is dropped as a whole. Identical contexts always produce
/// identical cohorts.
#[must_use]
pub fn classify(context: VisitorContext) -> Cohort {
    let VisitorContext {
        city,
        travel,
        time_of_day,
        office_open,
        visitor_status,
    } = context;

    let city = city
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let travel = travel.and_then(|t| {
        let time = t.time.trim().to_string();
        let distance = t.distance.trim().to_string();
        (!time.is_empty() && !distance.is_empty()).then_some(TravelInfo {
            mode: t.mode,
            time,
            distance,
        })
    });

    Cohort::from_normalized(VisitorContext {
        city,
        travel,
        time_of_day,
        office_open,
        visitor_status,
    })
}
