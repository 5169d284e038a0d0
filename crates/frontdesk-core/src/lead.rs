use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lead-capture payload posted to the external lead endpoint.
///
/// Built once per form submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackRequest {
    pub name: String,
    pub phone: String,
    pub service_slug: String,
    pub suburb_slug: String,
    pub emergency: bool,
    pub timestamp: DateTime<Utc>,
}
