//! Practice-level settings: phone number, time zone, opening hours, and the
//! CTA ordering policy. Loaded from an optional YAML file.

use std::collections::HashSet;
use std::path::Path;

use chrono::Weekday;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::cta::CtaType;
use crate::ConfigError;

/// Opening hours for one day, as whole local hours: open while
/// `open <= hour < close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: u32,
    pub close: u32,
}

impl DayHours {
    #[must_use]
    pub fn contains(&self, hour: u32) -> bool {
        (self.open..self.close).contains(&hour)
    }
}

/// Weekly schedule. A `None` day is closed all day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub monday: Option<DayHours>,
    pub tuesday: Option<DayHours>,
    pub wednesday: Option<DayHours>,
    pub thursday: Option<DayHours>,
    pub friday: Option<DayHours>,
    pub saturday: Option<DayHours>,
    pub sunday: Option<DayHours>,
}

impl WeeklyHours {
    #[must_use]
    pub fn for_weekday(&self, day: Weekday) -> Option<DayHours> {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    fn days(&self) -> [(&'static str, Option<DayHours>); 7] {
        [
            ("monday", self.monday),
            ("tuesday", self.tuesday),
            ("wednesday", self.wednesday),
            ("thursday", self.thursday),
            ("friday", self.friday),
            ("saturday", self.saturday),
            ("sunday", self.sunday),
        ]
    }
}

impl Default for WeeklyHours {
    fn default() -> Self {
        let weekday = Some(DayHours { open: 8, close: 18 });
        Self {
            monday: weekday,
            tuesday: weekday,
            wednesday: weekday,
            thursday: weekday,
            friday: Some(DayHours { open: 8, close: 13 }),
            saturday: Some(DayHours { open: 9, close: 13 }),
            sunday: None,
        }
    }
}

/// Replaceable CTA ordering table.
///
/// Each order lists candidates from highest to lowest priority; the selector
/// drops duplicates and tops up from [`CtaType::ALL`] when fewer than three
/// remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaPolicy {
    pub default_order: Vec<CtaType>,
    pub off_hours_order: Vec<CtaType>,
    pub emergency_order: Vec<CtaType>,
    pub promote_membership_for_frequent: bool,
}

impl Default for CtaPolicy {
    fn default() -> Self {
        Self {
            default_order: vec![CtaType::Book, CtaType::Membership, CtaType::Contact],
            off_hours_order: vec![CtaType::Call, CtaType::Book, CtaType::Contact],
            emergency_order: vec![CtaType::Call, CtaType::Book, CtaType::Contact],
            promote_membership_for_frequent: true,
        }
    }
}

impl CtaPolicy {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, order) in [
            ("default_order", &self.default_order),
            ("off_hours_order", &self.off_hours_order),
            ("emergency_order", &self.emergency_order),
        ] {
            if order.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "cta_policy.{name} must list at least one CTA"
                )));
            }
            let mut seen = HashSet::new();
            if let Some(dup) = order.iter().find(|cta| !seen.insert(**cta)) {
                return Err(ConfigError::Validation(format!(
                    "cta_policy.{name} lists '{dup}' more than once"
                )));
            }
        }

        if !matches!(
            self.off_hours_order.first(),
            Some(CtaType::Call | CtaType::Contact)
        ) {
            return Err(ConfigError::Validation(
                "cta_policy.off_hours_order must start with 'call' or 'contact'".to_string(),
            ));
        }

        if self.emergency_order.first() != Some(&CtaType::Call) {
            return Err(ConfigError::Validation(
                "cta_policy.emergency_order must start with 'call'".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_phone() -> String {
    "+61 2 9000 0000".to_string()
}

fn default_timezone() -> Tz {
    chrono_tz::Australia::Sydney
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeConfig {
    #[serde(default = "default_phone")]
    pub phone: String,
    /// IANA zone for the practice's local clock, e.g. `Australia/Sydney`.
    /// Unknown names fail to parse.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    #[serde(default)]
    pub hours: WeeklyHours,
    #[serde(default)]
    pub cta_policy: CtaPolicy,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            timezone: default_timezone(),
            hours: WeeklyHours::default(),
            cta_policy: CtaPolicy::default(),
        }
    }
}

impl PracticeConfig {
    /// Parse and validate a practice config from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the YAML is malformed or fails validation.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PracticeConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Validation(
                "phone must contain at least one digit".to_string(),
            ));
        }

        for (day, hours) in self.hours.days() {
            if let Some(h) = hours {
                if h.open >= h.close || h.close > 24 {
                    return Err(ConfigError::Validation(format!(
                        "{day} hours {}..{} are invalid; need open < close <= 24",
                        h.open, h.close
                    )));
                }
            }
        }

        self.cta_policy.validate()
    }
}

/// Load and validate the practice configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_practice(path: &Path) -> Result<PracticeConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PracticeFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    PracticeConfig::from_yaml_str(&content)
}

#[cfg(test)]
#[path = "practice_test.rs"]
mod tests;
