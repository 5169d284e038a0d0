use frontdesk_core::{Cohort, CtaType};

/// Whether to surface the "request a callback" form.
///
/// Only ever true while the office is closed, and then only for an
/// emergency, a late visit, or when the primary CTA is already a call or
/// contact path.
#[must_use]
pub fn should_show_callback(cohort: &Cohort, emergency: bool, primary: CtaType) -> bool {
    !cohort.office_open()
        && (emergency
            || cohort.is_late()
            || matches!(primary, CtaType::Call | CtaType::Contact))
}
