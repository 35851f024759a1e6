//! Command-line surface and run configuration.

use std::ffi::OsString;
use std::iter;

use clap::Parser;

/// Environment variable holding the log filter. Falls back to `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "INTERBURBULATOR_LOG";

/// Filter used when neither environment variable is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Argument that selects the demo table.
pub const BATCH_ARGUMENT: &str = "lazy";

/// Printed for any argument other than [`BATCH_ARGUMENT`].
pub const PLACEHOLDER: &str = ":)";

/// What the binary does for a given command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Interactive,
    Batch,
    Placeholder,
}

impl Mode {
    /// Only the first argument matters; anything after it is ignored.
    pub fn from_argument(argument: Option<&str>) -> Self {
        match argument {
            None => Mode::Interactive,
            Some(BATCH_ARGUMENT) => Mode::Batch,
            Some(_) => Mode::Placeholder,
        }
    }
}

/// Raw command line. Help and version flags are disabled so every argument
/// reaches [`Mode::from_argument`].
#[derive(Debug, Parser)]
#[command(
    name = "interburbulator",
    about = "Locate the center of a grid cell from three known corners",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// `lazy` replays the demo table; no argument starts the prompts.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub arguments: Vec<String>,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        Mode::from_argument(self.arguments.first().map(String::as_str))
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: Mode,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Interactive,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Build from an argument list (program name first). Arguments clap
    /// cannot represent, such as non UTF-8 ones, select the placeholder.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("interburbulator"));
        // A leading `--` ends option parsing, so a user-supplied `--` is kept
        // as the first argument instead of being swallowed.
        let argv = iter::once(program)
            .chain(iter::once(OsString::from("--")))
            .chain(args);
        let mode = Cli::try_parse_from(argv)
            .map(|cli| cli.mode())
            .unwrap_or(Mode::Placeholder);
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Read the log filter from the environment.
    pub fn with_env_log_filter(self) -> Self {
        let filter = resolve_log_filter(
            std::env::var(LOG_ENV_VAR).ok(),
            std::env::var("RUST_LOG").ok(),
        );
        Self {
            log_filter: filter,
            ..self
        }
    }
}

/// First non-blank candidate wins, then [`DEFAULT_LOG_FILTER`].
pub fn resolve_log_filter(primary: Option<String>, fallback: Option<String>) -> String {
    [primary, fallback]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = AppConfig::default();
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(AppConfig::from_args(["interburbulator"]).mode, Mode::Interactive);
        assert_eq!(AppConfig::from_args(["interburbulator", "lazy"]).mode, Mode::Batch);
        assert_eq!(AppConfig::from_args(["interburbulator", "lazy", "extra"]).mode, Mode::Batch);
        assert_eq!(AppConfig::from_args(["interburbulator", "busy"]).mode, Mode::Placeholder);
        assert_eq!(AppConfig::from_args(["interburbulator", "LAZY"]).mode, Mode::Placeholder);
    }

    #[test]
    fn test_flags_are_just_other_arguments() {
        assert_eq!(AppConfig::from_args(["interburbulator", "--help"]).mode, Mode::Placeholder);
        assert_eq!(AppConfig::from_args(["interburbulator", "-V"]).mode, Mode::Placeholder);
    }

    #[test]
    fn test_double_dash_selects_placeholder() {
        assert_eq!(AppConfig::from_args(["interburbulator", "--", "lazy"]).mode, Mode::Placeholder);
        assert_eq!(AppConfig::from_args(["interburbulator", "--"]).mode, Mode::Placeholder);
        assert_eq!(AppConfig::from_args(["interburbulator", "lazy", "--"]).mode, Mode::Batch);
        assert_eq!(AppConfig::from_args(Vec::<String>::new()).mode, Mode::Interactive);
    }

    #[test]
    fn test_resolve_log_filter() {
        assert_eq!(resolve_log_filter(None, None), "warn");
        assert_eq!(resolve_log_filter(Some("debug".into()), Some("info".into())), "debug");
        assert_eq!(resolve_log_filter(Some("  ".into()), Some("info".into())), "info");
        assert_eq!(resolve_log_filter(None, Some("trace".into())), "trace");
    }
}
