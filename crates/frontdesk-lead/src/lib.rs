pub mod client;
pub mod error;
pub mod form;

pub use client::LeadClient;
pub use error::{FormError, LeadError};
pub use form::{CallbackForm, FormState, GENERIC_ERROR_MESSAGE};
