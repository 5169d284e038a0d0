use frontdesk_core::AppConfig;
use frontdesk_lead::{CallbackForm, LeadClient};

pub(crate) async fn run_callback(
    config: &AppConfig,
    name: &str,
    phone: &str,
    service: &str,
    suburb: &str,
    emergency: bool,
) -> anyhow::Result<()> {
    let client = LeadClient::new(
        &config.lead_base_url,
        config.lead_timeout_secs,
        &config.user_agent,
    )?;
    let mut form = CallbackForm::new(service, suburb, emergency);

    if let Err(e) = form.submit(&client, name, phone).await {
        tracing::warn!(error = %e, endpoint = %client.endpoint(), "callback submission failed");
        let shown = form
            .error_message()
            .map_or_else(|| e.to_string(), ToOwned::to_owned);
        anyhow::bail!(shown);
    }

    if let Some(message) = form.confirmation() {
        println!("{message}");
    }
    Ok(())
}
