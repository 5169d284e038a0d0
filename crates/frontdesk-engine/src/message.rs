//! Contextual greeting line shown above the CTAs.

use frontdesk_core::{Cohort, TimeOfDay, TravelMode, VisitorStatus};

fn greeting(time: TimeOfDay) -> &'static str {
    match time {
        TimeOfDay::Morning => "Good morning",
        TimeOfDay::Afternoon => "Good afternoon",
        TimeOfDay::Evening => "Good evening",
        TimeOfDay::Night => "Hello",
    }
}

fn travel_phrase(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => "by car",
        TravelMode::Walking => "on foot",
        TravelMode::Transit => "by public transport",
    }
}

/// Composes the message for a cohort. Never returns an empty string.
///
/// First match wins: closed late in the day, travel estimate, returning
/// visitor, known city, neutral welcome.
#[must_use]
pub fn compose(cohort: &Cohort) -> String {
    let hello = greeting(cohort.time_of_day());
    let city = cohort.city();

    if !cohort.office_open() && cohort.is_late() {
        let who = city.map_or_else(String::new, |c| format!(", {c}"));
        return format!(
            "{hello}{who}! We're closed for the night. Request a callback and we'll ring you as soon as we open."
        );
    }

    if let Some(travel) = cohort.travel() {
        let from = city.unwrap_or("you");
        return format!(
            "{hello}! We're just {} {} ({}) from {from}.",
            travel.time,
            travel_phrase(travel.mode),
            travel.distance
        );
    }

    match (cohort.visitor_status(), city) {
        (VisitorStatus::Frequent, Some(c)) => {
            format!("Welcome back, {c}! Thanks for being a regular.")
        }
        (VisitorStatus::Frequent, None) => "Welcome back! Thanks for being a regular.".to_string(),
        (VisitorStatus::Returning, Some(c)) => format!("Welcome back, {c}! Good to see you again."),
        (VisitorStatus::Returning, None) => "Welcome back! Good to see you again.".to_string(),
        (VisitorStatus::New, Some(c)) => format!("{hello}, {c}! Trusted dental care near you."),
        (VisitorStatus::New, None) => format!("{hello}! Welcome to our practice."),
    }
}
