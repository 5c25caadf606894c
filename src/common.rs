use once_cell::sync::Lazy;
use tracing::debug;

use crate::app_config::{AppConfig, DEFAULT_API_URL};

/// The global, mutable application configuration.
pub static APP_CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    debug!("Creating configuration instance with api url {DEFAULT_API_URL}");
    AppConfig::new()
});

/// Lifecycle of [`APP_CONFIG`]. Moves to `Initialized` once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    Uninitialized,
    Initialized,
}

/// Report whether the global configuration exists yet, without creating it
pub fn instance_state() -> InstanceState {
    if Lazy::get(&APP_CONFIG).is_some() {
        InstanceState::Initialized
    } else {
        InstanceState::Uninitialized
    }
}
