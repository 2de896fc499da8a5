//! smdcode — SMD resistor marking code decoder.

use anyhow::Result;
use smdcode_lib::{app, config, errors};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    let exit_code = app::run(&config)?;
    if exit_code != errors::exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
    Ok(())
}
