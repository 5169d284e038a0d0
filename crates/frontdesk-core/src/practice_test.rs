use std::io::Write;

use super::*;

#[test]
fn default_config_is_valid() {
    PracticeConfig::default()
        .validate()
        .expect("built-in defaults must validate");
}

#[test]
fn default_hours_close_sunday_and_early_friday() {
    let hours = WeeklyHours::default();
    assert!(hours.for_weekday(Weekday::Sun).is_none());
    let friday = hours.for_weekday(Weekday::Fri).expect("friday has hours");
    assert!(friday.contains(12));
    assert!(!friday.contains(13));
}

#[test]
fn day_hours_close_is_exclusive() {
    let h = DayHours { open: 8, close: 18 };
    assert!(!h.contains(7));
    assert!(h.contains(8));
    assert!(h.contains(17));
    assert!(!h.contains(18));
}

#[test]
fn from_yaml_str_fills_missing_sections_with_defaults() {
    let cfg = PracticeConfig::from_yaml_str("phone: \"02 9999 1111\"\n").expect("valid yaml");
    assert_eq!(cfg.phone, "02 9999 1111");
    assert_eq!(cfg.timezone, chrono_tz::Australia::Sydney);
    assert_eq!(cfg.hours, WeeklyHours::default());
    assert_eq!(cfg.cta_policy, CtaPolicy::default());
}

#[test]
fn from_yaml_str_reads_hours_and_policy() {
    let yaml = r"
phone: '+61 2 8000 0000'
timezone: Australia/Perth
hours:
  monday: { open: 7, close: 19 }
  saturday: { open: 8, close: 12 }
cta_policy:
  default_order: [appointment, book]
  off_hours_order: [contact, call]
";
    let cfg = PracticeConfig::from_yaml_str(yaml).expect("valid yaml");
    assert_eq!(cfg.hours.monday, Some(DayHours { open: 7, close: 19 }));
    assert!(cfg.hours.tuesday.is_none(), "unlisted days are closed");
    assert_eq!(
        cfg.cta_policy.default_order,
        vec![CtaType::Appointment, CtaType::Book]
    );
    assert_eq!(
        cfg.cta_policy.emergency_order,
        CtaPolicy::default().emergency_order
    );
    assert_eq!(cfg.timezone, chrono_tz::Australia::Perth);
}

#[test]
fn validate_rejects_inverted_hours() {
    let mut cfg = PracticeConfig::default();
    cfg.hours.wednesday = Some(DayHours { open: 18, close: 8 });
    let err = cfg.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("wednesday")),
        "unexpected error: {err:?}"
    );
}

#[test]
fn validate_rejects_close_after_midnight() {
    let mut cfg = PracticeConfig::default();
    cfg.hours.friday = Some(DayHours { open: 8, close: 25 });
    assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn validate_rejects_phone_without_digits() {
    let cfg = PracticeConfig {
        phone: "call us".to_string(),
        ..PracticeConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn from_yaml_str_rejects_unknown_timezone() {
    let result = PracticeConfig::from_yaml_str("timezone: Mars/Olympus_Mons\n");
    assert!(matches!(result, Err(ConfigError::PracticeFileParse(_))));
}

#[test]
fn from_yaml_str_accepts_utc() {
    let cfg = PracticeConfig::from_yaml_str("timezone: UTC\n").expect("valid yaml");
    assert_eq!(cfg.timezone, Tz::UTC);
}

#[test]
fn validate_rejects_duplicate_cta_in_order() {
    let mut cfg = PracticeConfig::default();
    cfg.cta_policy.default_order = vec![CtaType::Book, CtaType::Book];
    let err = cfg.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("default_order")),
        "unexpected error: {err:?}"
    );
}

#[test]
fn validate_rejects_empty_order() {
    let mut cfg = PracticeConfig::default();
    cfg.cta_policy.off_hours_order = vec![];
    assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn validate_rejects_off_hours_order_starting_with_book() {
    let mut cfg = PracticeConfig::default();
    cfg.cta_policy.off_hours_order = vec![CtaType::Book, CtaType::Call];
    assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn validate_rejects_emergency_order_not_starting_with_call() {
    let mut cfg = PracticeConfig::default();
    cfg.cta_policy.emergency_order = vec![CtaType::Contact, CtaType::Call];
    assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn from_yaml_str_rejects_unknown_cta() {
    let result = PracticeConfig::from_yaml_str("cta_policy:\n  default_order: [fax]\n");
    assert!(matches!(result, Err(ConfigError::PracticeFileParse(_))));
}

#[test]
fn load_practice_missing_file_is_io_error() {
    let result = load_practice(Path::new("/nonexistent/frontdesk/practice.yaml"));
    assert!(matches!(result, Err(ConfigError::PracticeFileIo { .. })));
}

#[test]
fn load_practice_reads_file_from_disk() {
    let path = std::env::temp_dir().join(format!(
        "frontdesk-practice-{}.yaml",
        std::process::id()
    ));
    {
        let mut file = std::fs::File::create(&path).expect("create temp file");
        writeln!(file, "phone: '1300 000 000'").expect("write temp file");
    }
    let cfg = load_practice(&path).expect("load practice");
    std::fs::remove_file(&path).ok();
    assert_eq!(cfg.phone, "1300 000 000");
}
