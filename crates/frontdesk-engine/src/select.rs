//! CTA selection.
//!
//! The rule that matches first picks a candidate order from the
//! [`CtaPolicy`]; frequent visitors get `membership` pulled up behind the
//! primary; [`CtaType::ALL`] tops up the tail so three distinct slots always
//! exist.

use frontdesk_core::{Cohort, CtaDecision, CtaPolicy, CtaType};

/// Selects CTAs with the built-in policy.
#[must_use]
pub fn choose_ctas(cohort: &Cohort, service_slug: &str, emergency: bool) -> CtaDecision {
    select_ctas(cohort, service_slug, emergency, &CtaPolicy::default())
}

/// Selects three distinct CTAs in priority order.
///
/// 1. `emergency` forces `call` into the primary slot.
/// 2. Outside office hours the policy's off-hours order applies.
/// 3. Frequent visitors see `membership` directly after the primary.
/// 4. Otherwise the default order applies.
///
/// Consultation services swap `book` for `appointment`.
#[must_use]
pub fn select_ctas(
    cohort: &Cohort,
    service_slug: &str,
    emergency: bool,
    policy: &CtaPolicy,
) -> CtaDecision {
    let base: &[CtaType] = if emergency {
        &policy.emergency_order
    } else if !cohort.office_open() {
        // Non-emergency visits reach this branch at any closed hour.
        &policy.off_hours_order
    } else {
        &policy.default_order
    };

    let consultation = is_consultation(service_slug);
    let mut candidates: Vec<CtaType> = Vec::with_capacity(base.len() + CtaType::ALL.len() + 2);
    if emergency {
        candidates.push(CtaType::Call);
    }
    candidates.extend(base.iter().map(|&cta| {
        if consultation && cta == CtaType::Book {
            CtaType::Appointment
        } else {
            cta
        }
    }));
    if policy.promote_membership_for_frequent && cohort.is_frequent() {
        let at = candidates.len().min(1);
        candidates.insert(at, CtaType::Membership);
    }
    candidates.extend(CtaType::ALL);

    let mut picked: Vec<CtaType> = Vec::with_capacity(3);
    for cta in candidates {
        if !picked.contains(&cta) {
            picked.push(cta);
            if picked.len() == 3 {
                break;
            }
        }
    }

    let decision = match picked[..] {
        [primary, secondary, tertiary] => CtaDecision::try_new(primary, secondary, tertiary),
        _ => None,
    };
    decision.unwrap_or_else(|| {
        tracing::warn!(?picked, "CTA selection fell back to baseline");
        CtaDecision::BASELINE
    })
}

fn is_consultation(service_slug: &str) -> bool {
    service_slug.to_ascii_lowercase().contains("consult")
}
