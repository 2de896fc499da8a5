//! Application configuration from CLI flags and environment.

use clap::Parser;

/// smdcode — SMD resistor marking code decoder.
#[derive(Parser, Debug)]
#[command(name = "smdcode", version, about)]
pub struct AppConfig {
    /// SMD code to decode, e.g. 103, 4R7, 01C.
    pub code: Option<String>,

    /// SMD code (named alternative to the positional argument).
    #[arg(long = "code", value_name = "CODE")]
    pub code_flag: Option<String>,

    /// Significant digits in the formatted resistance.
    #[arg(short, long, default_value_t = 3, env = "SMDCODE_PRECISION")]
    pub precision: usize,

    /// Quiet mode (only output the formatted value).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (include the exact ohms value).
    #[arg(short, long)]
    pub verbose: bool,

    /// Launch the interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The code to decode: the named flag wins over the positional.
    #[must_use]
    pub fn effective_code(&self) -> Option<&str> {
        self.code_flag.as_deref().or(self.code.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> AppConfig {
        <AppConfig as Parser>::try_parse_from(args).unwrap()
    }

    #[test]
    fn positional_code() {
        let config = parse_from(&["smdcode", "103"]);
        assert_eq!(config.effective_code(), Some("103"));
    }

    #[test]
    fn named_code() {
        let config = parse_from(&["smdcode", "--code", "4R7"]);
        assert_eq!(config.effective_code(), Some("4R7"));
    }

    #[test]
    fn named_code_wins_over_positional() {
        let config = parse_from(&["smdcode", "103", "--code", "4R7"]);
        assert_eq!(config.effective_code(), Some("4R7"));
    }

    #[test]
    fn no_code() {
        let config = parse_from(&["smdcode"]);
        assert_eq!(config.effective_code(), None);
    }

    #[test]
    fn precision_default() {
        let config = parse_from(&["smdcode", "103"]);
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn precision_flag() {
        let config = parse_from(&["smdcode", "103", "-p", "5"]);
        assert_eq!(config.precision, 5);
    }
}
