//! Per-request visitor context and the cohort derived from it.
//!
//! Both types are plain values built fresh for every request. Nothing here is
//! cached or shared, so two concurrent requests can never observe each
//! other's classification.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Walking,
    Transit,
}

/// Time-of-day bucket in the practice's local time. Ordered
/// `Morning < Afternoon < Evening < Night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Evening or night.
    #[must_use]
    pub fn is_late(self) -> bool {
        matches!(self, TimeOfDay::Evening | TimeOfDay::Night)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitorStatus {
    New,
    Returning,
    Frequent,
}

/// Pre-formatted travel estimate supplied by the routing collaborator.
///
/// Grouped so that mode, time, and distance are either all present or all
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelInfo {
    pub mode: TravelMode,
    /// e.g. `"12 mins"`
    pub time: String,
    /// e.g. `"8.4 km"`
    pub distance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorContext {
    pub city: Option<String>,
    pub travel: Option<TravelInfo>,
    pub time_of_day: TimeOfDay,
    pub office_open: bool,
    pub visitor_status: VisitorStatus,
}

impl VisitorContext {
    /// A context with no geo or travel signal at all.
    #[must_use]
    pub fn without_signal(
        time_of_day: TimeOfDay,
        office_open: bool,
        visitor_status: VisitorStatus,
    ) -> Self {
        Self {
            city: None,
            travel: None,
            time_of_day,
            office_open,
            visitor_status,
        }
    }
}

/// A classified visitor. Constructed by the engine's classifier, which
/// normalizes the context before wrapping it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    #[serde(flatten)]
    context: VisitorContext,
}

impl Cohort {
    /// Wraps an already-normalized context.
    #[must_use]
    pub fn from_normalized(context: VisitorContext) -> Self {
        Self { context }
    }

    #[must_use]
    pub fn context(&self) -> &VisitorContext {
        &self.context
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.context.city.as_deref()
    }

    #[must_use]
    pub fn travel(&self) -> Option<&TravelInfo> {
        self.context.travel.as_ref()
    }

    #[must_use]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.context.time_of_day
    }

    #[must_use]
    pub fn office_open(&self) -> bool {
        self.context.office_open
    }

    #[must_use]
    pub fn visitor_status(&self) -> VisitorStatus {
        self.context.visitor_status
    }

    /// True when at least one of city or travel time is known.
    #[must_use]
    pub fn has_signal(&self) -> bool {
        self.context.city.is_some() || self.context.travel.is_some()
    }

    /// Zero-signal guard: no city and no travel time. Callers must render
    /// nothing at all for such a cohort.
    #[must_use]
    pub fn is_zero_signal(&self) -> bool {
        !self.has_signal()
    }

    #[must_use]
    pub fn is_late(&self) -> bool {
        self.context.time_of_day.is_late()
    }

    #[must_use]
    pub fn is_frequent(&self) -> bool {
        self.context.visitor_status == VisitorStatus::Frequent
    }
}
