//! Application entry point and dispatch.

use anyhow::Result;

use smdcode_cli::CliPresenter;
use smdcode_core::decode;
use smdcode_tui::{prefs, TuiApp};

use crate::config::AppConfig;
use crate::errors::{self, exit_codes};

/// Run the application. Returns the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        smdcode_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    // Handle TUI mode
    if config.tui {
        return run_tui();
    }

    // One-shot CLI mode
    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<i32> {
    let Some(code) = config.effective_code() else {
        eprintln!("Error: please provide a code (positional or --code)");
        return Ok(exit_codes::ERROR_USAGE);
    };

    let presenter = CliPresenter::new(config.verbose, config.quiet);
    let result = match decode(code) {
        Ok(result) => result,
        Err(err) => {
            presenter.present_error(&err);
            return Ok(errors::handle_error(&err));
        }
    };

    if let Err(err) = presenter.present_result(code, &result, config.precision) {
        presenter.present_error(&err);
        return Ok(errors::handle_error(&err));
    }

    Ok(exit_codes::SUCCESS)
}

fn run_tui() -> Result<i32> {
    let user_prefs = prefs::load_prefs().unwrap_or_default();
    let mut app = TuiApp::new(&user_prefs);

    app.run()?;

    // Persist theme/live-mode/geometry for the next session. A failed
    // save must not turn a clean exit into an error.
    if let Err(e) = prefs::save_prefs(&app.prefs()) {
        tracing::warn!(error = %e, "failed to save preferences");
    }

    Ok(exit_codes::SUCCESS)
}
