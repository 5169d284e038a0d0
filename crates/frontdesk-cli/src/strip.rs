use frontdesk_core::{AppConfig, PracticeConfig};
use frontdesk_engine::{evaluate, RawSignals, Strip, StripRequest};

pub(crate) fn load_practice_or_default(config: &AppConfig) -> anyhow::Result<PracticeConfig> {
    match &config.practice_path {
        Some(path) => Ok(frontdesk_core::load_practice(path)?),
        None => Ok(PracticeConfig::default()),
    }
}

/// Renders the strip JSON, or `None` when the strip is suppressed.
pub(crate) fn render_json(
    raw: &RawSignals,
    request: &StripRequest,
    practice: &PracticeConfig,
) -> anyhow::Result<Option<String>> {
    evaluate(raw, request, practice)
        .map(|strip: Strip| serde_json::to_string_pretty(&strip))
        .transpose()
        .map_err(Into::into)
}

pub(crate) fn run_strip(
    raw: &RawSignals,
    request: &StripRequest,
    practice: &PracticeConfig,
) -> anyhow::Result<()> {
    match render_json(raw, request, practice)? {
        Some(json) => println!("{json}"),
        None => println!("no city or travel signal: strip suppressed"),
    }
    Ok(())
}
