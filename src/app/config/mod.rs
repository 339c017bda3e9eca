//! Environment-backed configuration loading.
//!
//! Pure schema parsing and validation live in `domain::config`; this module
//! layers the optional config file, the environment and explicit overrides.

mod load_config;

pub use load_config::{API_URL_ENV, load_config};
