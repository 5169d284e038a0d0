pub mod app_config;
pub mod config;
pub mod cta;
pub mod lead;
pub mod practice;
pub mod visitor;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use cta::{CtaDecision, CtaType};
pub use lead::CallbackRequest;
pub use practice::{load_practice, CtaPolicy, DayHours, PracticeConfig, WeeklyHours};
pub use visitor::{Cohort, TimeOfDay, TravelInfo, TravelMode, VisitorContext, VisitorStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read practice file {path}: {source}")]
    PracticeFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse practice file: {0}")]
    PracticeFileParse(#[from] serde_yaml::Error),

    #[error("practice config validation failed: {0}")]
    Validation(String),
}
