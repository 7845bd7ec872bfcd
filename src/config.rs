//! Command-line configuration
//!
//! ```text
//! simian [--tokens] [--no-color] [FILE]
//! ```
//!
//! Without `FILE` the interactive token printer starts. Colour is also turned
//! off when the `NO_COLOR` environment variable is set.

use std::fmt;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: simian [--tokens] [--no-color] [FILE]

Without FILE, starts an interactive session that prints the tokens of each line.

Options:
  --tokens     Print the token stream of FILE before the parsed program
  --no-color   Disable coloured output (also disabled by NO_COLOR)
  -h, --help   Show this message";

/// Errors produced while reading the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    /// A second positional argument after `FILE`
    UnexpectedArgument(String),
    HelpRequested,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::UnexpectedArgument(arg) => {
                write!(f, "Unexpected argument '{}': only one input file is accepted", arg)
            }
            ConfigError::HelpRequested => f.write_str(USAGE),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source file to parse; `None` runs the interactive loop
    pub source: Option<PathBuf>,
    pub show_tokens: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: None,
            show_tokens: false,
            color: true,
        }
    }
}

impl Config {
    /// Build the configuration from the process arguments and environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_args(std::env::args().skip(1))?;
        if std::env::var_os("NO_COLOR").is_some() {
            config.color = false;
        }
        Ok(config)
    }

    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Config::default();

        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "--tokens" => config.show_tokens = true,
                "--no-color" => config.color = false,
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                other if config.source.is_some() => {
                    return Err(ConfigError::UnexpectedArgument(other.to_string()));
                }
                path => config.source = Some(PathBuf::from(path)),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.color);
    }

    #[test]
    fn test_file_and_flags() {
        let config = Config::from_args(["--tokens", "prog.monkey", "--no-color"]).unwrap();
        assert_eq!(config.source, Some(PathBuf::from("prog.monkey")));
        assert!(config.show_tokens);
        assert!(!config.color);
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert_eq!(
            Config::from_args(["--verbose"]),
            Err(ConfigError::UnknownFlag("--verbose".to_string()))
        );
    }

    #[test]
    fn test_rejects_second_file() {
        let err = Config::from_args(["a.monkey", "b.monkey"]).unwrap_err();
        assert_eq!(err, ConfigError::UnexpectedArgument("b.monkey".to_string()));
        assert!(err.to_string().contains("only one input file"));
    }

    #[test]
    fn test_help() {
        assert_eq!(Config::from_args(["-h"]), Err(ConfigError::HelpRequested));
        assert_eq!(ConfigError::HelpRequested.to_string(), USAGE);
    }
}
