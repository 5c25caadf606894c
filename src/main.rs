mod app_config;
mod common;
mod error;


use std::io::{self, Write};

use tracing::{debug, span, Level};
use tracing_subscriber::EnvFilter;

use crate::{app_config::AppConfig, common::instance_state, error::AppError};

/// The URL the demonstration swaps in for the default.
const NEW_API_URL: &str = "https://api.new-example.com";

/// Install the `fmt` subscriber. Everything goes to stderr so stdout only carries the demo.
fn init_tracing() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Exercise the shared configuration and write what it observes to `out`: whether two
/// lookups return the same instance, then the URL a third lookup sees after an update.
fn run_demo<W: Write>(out: &mut W) -> Result<(), AppError> {
    let span = span!(Level::INFO, "Demo");
    let _enter = span.enter();
    debug!("Configuration is {:?}", instance_state());

    let config1 = AppConfig::get_instance();
    let config2 = AppConfig::get_instance();
    writeln!(out, "{}", config1.is_same_instance(config2))?;

    config1.set_api_url(NEW_API_URL);

    let config3 = AppConfig::get_instance();
    writeln!(out, "{}", config3.api_url())?;

    debug!("Configuration is {:?}", instance_state());
    Ok(())
}

fn main() -> Result<(), AppError> {
    init_tracing()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out)?;
    out.flush()?;

    Ok(())
}
