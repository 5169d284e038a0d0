//! Per-request visitor classification and CTA selection.
//!
//! Every function in this crate is a pure function of its arguments. The
//! pipeline is `extract` -> `classify` -> {`compose`, `select_ctas` ->
//! `label`/`href`, `should_show_callback`}, tied together by
//! [`render_strip`].

pub mod classify;
pub mod gate;
pub mod label;
pub mod message;
pub mod select;
pub mod signals;
pub mod strip;

pub use classify::{classify, office_open, time_of_day};
pub use gate::should_show_callback;
pub use label::{href, label, LinkTemplates};
pub use message::compose;
pub use select::{choose_ctas, select_ctas};
pub use signals::{extract, parse_visit_count, RawSignals};
pub use strip::{evaluate, render_strip, CallbackPrompt, CtaLink, Strip, StripRequest};
