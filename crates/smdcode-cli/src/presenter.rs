//! CLI result presenter.

use console::style;

use smdcode_core::{format_ohms, DecodeResult, SmdError};

/// Presents decode results and errors on the terminal.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Render one decoded code as a display line.
    ///
    /// Normal mode: `<code> => <formatted> (<scheme>)`. Quiet mode emits
    /// only the formatted value. Verbose mode appends the exact ohms.
    pub fn render_result(
        &self,
        code: &str,
        result: &DecodeResult,
        precision: usize,
    ) -> Result<String, SmdError> {
        let formatted = format_ohms(result.ohms, precision)?;

        if self.quiet {
            return Ok(formatted);
        }

        let mut line = format!("{code} => {formatted} ({})", result.scheme);
        if self.verbose {
            line.push_str(&format!(" [{} ohms]", result.ohms));
        }
        Ok(line)
    }

    /// Print a decoded result to stdout.
    pub fn present_result(
        &self,
        code: &str,
        result: &DecodeResult,
        precision: usize,
    ) -> Result<(), SmdError> {
        println!("{}", self.render_result(code, result, precision)?);
        Ok(())
    }

    /// Print an error line to stderr, styled red when attached to a tty.
    pub fn present_error(&self, error: &SmdError) {
        eprintln!("{} {error}", style("Error:").red().bold());
    }
}
