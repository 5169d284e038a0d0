//! The closed call-to-action vocabulary and the ordered triple chosen per request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaType {
    Call,
    Book,
    Contact,
    Membership,
    Chat,
    Appointment,
}

impl CtaType {
    /// Every variant, in the order used as the last-resort fill sequence.
    pub const ALL: [CtaType; 6] = [
        CtaType::Book,
        CtaType::Membership,
        CtaType::Contact,
        CtaType::Call,
        CtaType::Chat,
        CtaType::Appointment,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CtaType::Call => "call",
            CtaType::Book => "book",
            CtaType::Contact => "contact",
            CtaType::Membership => "membership",
            CtaType::Chat => "chat",
            CtaType::Appointment => "appointment",
        }
    }
}

impl std::fmt::Display for CtaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three pairwise-distinct CTAs in display priority order.
///
/// Fields are private so the distinctness invariant can only be established
/// through [`CtaDecision::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CtaDecision {
    primary: CtaType,
    secondary: CtaType,
    tertiary: CtaType,
}

impl CtaDecision {
    /// Safe fallback ordering.
    pub const BASELINE: CtaDecision = CtaDecision {
        primary: CtaType::Book,
        secondary: CtaType::Membership,
        tertiary: CtaType::Contact,
    };

    /// Returns `None` if any two slots hold the same CTA.
    #[must_use]
    pub fn try_new(primary: CtaType, secondary: CtaType, tertiary: CtaType) -> Option<Self> {
        if primary == secondary || primary == tertiary || secondary == tertiary {
            return None;
        }
        Some(Self {
            primary,
            secondary,
            tertiary,
        })
    }

    #[must_use]
    pub fn primary(&self) -> CtaType {
        self.primary
    }

    #[must_use]
    pub fn secondary(&self) -> CtaType {
        self.secondary
    }

    #[must_use]
    pub fn tertiary(&self) -> CtaType {
        self.tertiary
    }

    #[must_use]
    pub fn to_array(&self) -> [CtaType; 3] {
        [self.primary, self.secondary, self.tertiary]
    }
}
