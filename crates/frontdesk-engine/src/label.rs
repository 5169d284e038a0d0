//! Display labels and link targets for each CTA.

use frontdesk_core::{Cohort, CtaType, PracticeConfig, VisitorStatus};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in query values (RFC 3986 unreserved set).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Button text for a CTA, given the visitor's cohort.
#[must_use]
pub fn label(cta: CtaType, cohort: &Cohort) -> &'static str {
    match cta {
        CtaType::Call if cohort.office_open() => "Call now",
        CtaType::Call => "Request a call",
        CtaType::Book if cohort.is_late() => "Book tomorrow",
        CtaType::Book if cohort.visitor_status() == VisitorStatus::Frequent => "Quick booking",
        CtaType::Book => "Book online",
        CtaType::Membership if cohort.is_frequent() => "Upgrade membership",
        CtaType::Membership => "Join membership",
        CtaType::Chat => "Chat with us",
        CtaType::Contact => "Contact us",
        CtaType::Appointment => "Free consultation",
    }
}

/// Fixed link templates. Only the practice phone number varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplates {
    tel: String,
}

impl LinkTemplates {
    /// Builds templates from a display phone number, keeping digits and a
    /// leading `+`.
    #[must_use]
    pub fn new(phone: &str) -> Self {
        let trimmed = phone.trim();
        let mut tel = String::with_capacity(trimmed.len());
        if trimmed.starts_with('+') {
            tel.push('+');
        }
        tel.extend(trimmed.chars().filter(char::is_ascii_digit));
        Self { tel }
    }

    #[must_use]
    pub fn from_practice(practice: &PracticeConfig) -> Self {
        Self::new(&practice.phone)
    }
}

/// Link target for a CTA. A pure string template; slugs are percent-encoded.
#[must_use]
pub fn href(cta: CtaType, links: &LinkTemplates, service_slug: &str, suburb_slug: &str) -> String {
    let s = utf8_percent_encode(service_slug, QUERY_VALUE);
    let a = utf8_percent_encode(suburb_slug, QUERY_VALUE);
    match cta {
        CtaType::Call => format!("tel:{}", links.tel),
        CtaType::Book => format!("/book?service={s}&area={a}"),
        CtaType::Appointment => format!("/book?service={s}&area={a}&type=consultation"),
        CtaType::Contact => format!("/contact?service={s}&area={a}"),
        CtaType::Membership => format!("/membership?area={a}"),
        CtaType::Chat => format!("/contact?service={s}&area={a}&method=chat"),
    }
}
