//! The rendered personalization strip: message, three CTA links, and the
//! optional callback prompt.

use frontdesk_core::{Cohort, CtaType, PracticeConfig};
use serde::Serialize;

use crate::classify::classify;
use crate::gate::should_show_callback;
use crate::label::{href, label, LinkTemplates};
use crate::message::compose;
use crate::select::select_ctas;
use crate::signals::{extract, RawSignals};

/// Page-supplied inputs for one strip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripRequest {
    pub service_slug: String,
    pub suburb_slug: String,
    pub emergency: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaLink {
    pub kind: CtaType,
    pub label: String,
    pub href: String,
}

/// Context handed to the callback form when the gate opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackPrompt {
    pub service_slug: String,
    pub suburb_slug: String,
    pub emergency: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Strip {
    pub message: String,
    pub ctas: [CtaLink; 3],
    pub callback: Option<CallbackPrompt>,
}

/// Renders the strip for a classified visitor.
///
/// Returns `None` for a zero-signal cohort: no message, no CTAs, no form.
#[must_use]
pub fn render_strip(
    cohort: &Cohort,
    request: &StripRequest,
    practice: &PracticeConfig,
) -> Option<Strip> {
    if cohort.is_zero_signal() {
        tracing::trace!("zero-signal cohort; suppressing strip");
        return None;
    }

    let decision = select_ctas(
        cohort,
        &request.service_slug,
        request.emergency,
        &practice.cta_policy,
    );
    let links = LinkTemplates::from_practice(practice);
    let ctas = decision.to_array().map(|kind| CtaLink {
        kind,
        label: label(kind, cohort).to_string(),
        href: href(kind, &links, &request.service_slug, &request.suburb_slug),
    });

    let callback = should_show_callback(cohort, request.emergency, decision.primary()).then(|| {
        CallbackPrompt {
            service_slug: request.service_slug.clone(),
            suburb_slug: request.suburb_slug.clone(),
            emergency: request.emergency,
        }
    });

    Some(Strip {
        message: compose(cohort),
        ctas,
        callback,
    })
}

/// Runs the full pipeline for one request: extract, classify, render.
#[must_use]
pub fn evaluate(
    raw: &RawSignals,
    request: &StripRequest,
    practice: &PracticeConfig,
) -> Option<Strip> {
    let cohort = classify(extract(raw, practice));
    render_strip(&cohort, request, practice)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use frontdesk_core::{TimeOfDay, VisitorContext, VisitorStatus};

    use super::*;
    use crate::fixtures::cohort;

    fn request(emergency: bool) -> StripRequest {
        StripRequest {
            service_slug: "dental-implants".to_string(),
            suburb_slug: "parramatta".to_string(),
            emergency,
        }
    }

    #[test]
    fn zero_signal_renders_nothing() {
        for open in [true, false] {
            let c = classify(VisitorContext::without_signal(
                TimeOfDay::Night,
                open,
                VisitorStatus::Frequent,
            ));
            assert!(render_strip(&c, &request(true), &PracticeConfig::default()).is_none());
        }
    }

    #[test]
    fn evaluate_suppresses_when_headers_missing() {
        let raw = RawSignals::at(Utc.with_ymd_and_hms(2026, 10, 13, 21, 0, 0).unwrap());
        assert!(evaluate(&raw, &request(false), &PracticeConfig::default()).is_none());
    }

    #[test]
    fn night_closed_new_visitor_strip() {
        let c = cohort(TimeOfDay::Night, false, VisitorStatus::New);
        let strip = render_strip(&c, &request(false), &PracticeConfig::default())
            .expect("strip rendered");
        assert!(matches!(
            strip.ctas[0].kind,
            CtaType::Call | CtaType::Contact
        ));
        assert_eq!(strip.ctas[0].label, "Request a call");
        assert_eq!(strip.ctas[0].href, "tel:+61290000000");
        assert_eq!(
            strip.callback,
            Some(CallbackPrompt {
                service_slug: "dental-implants".to_string(),
                suburb_slug: "parramatta".to_string(),
                emergency: false,
            })
        );
    }

    #[test]
    fn open_morning_frequent_visitor_strip() {
        let c = cohort(TimeOfDay::Morning, true, VisitorStatus::Frequent);
        let strip = render_strip(&c, &request(false), &PracticeConfig::default())
            .expect("strip rendered");
        let labels: Vec<&str> = strip.ctas.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Quick booking", "Upgrade membership", "Contact us"]);
        assert_eq!(
            strip.ctas[0].href,
            "/book?service=dental-implants&area=parramatta"
        );
        assert!(strip.callback.is_none());
    }

    #[test]
    fn emergency_while_closed_shows_callback_with_flag() {
        let c = cohort(TimeOfDay::Afternoon, false, VisitorStatus::Returning);
        let strip = render_strip(&c, &request(true), &PracticeConfig::default())
            .expect("strip rendered");
        assert_eq!(strip.ctas[0].kind, CtaType::Call);
        assert!(strip.callback.expect("callback shown").emergency);
    }

    #[test]
    fn strip_serializes_camel_case() {
        let c = cohort(TimeOfDay::Night, false, VisitorStatus::New);
        let strip = render_strip(&c, &request(false), &PracticeConfig::default())
            .expect("strip rendered");
        let json = serde_json::to_value(&strip).expect("serialize");
        assert_eq!(json["ctas"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["ctas"][0]["kind"], "call");
        assert_eq!(json["callback"]["serviceSlug"], "dental-implants");
    }

    #[test]
    fn identical_inputs_render_identically() {
        let c = cohort(TimeOfDay::Evening, false, VisitorStatus::Frequent);
        let practice = PracticeConfig::default();
        assert_eq!(
            render_strip(&c, &request(false), &practice),
            render_strip(&c, &request(false), &practice)
        );
    }
}
