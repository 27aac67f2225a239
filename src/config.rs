// Runtime configuration for the syntree binary and construction context

use crate::constants::{DEFAULT_MAX_CHILDREN, DEFAULT_OUTPUT_PATH};
use crate::errors::ConfigError;
use crate::tree::ChildLimit;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Child attachment policy applied by the construction context
    pub child_limit: ChildLimit,
    /// Destination of the formatted tree file
    pub output_path: PathBuf,
    /// Open the terminal inspector after rendering
    pub interactive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            child_limit: ChildLimit::Capped(DEFAULT_MAX_CHILDREN),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            interactive: false,
        }
    }
}

impl Config {
    /// Parse command-line arguments, excluding the program name.
    ///
    /// Accepts `--unbounded`, `--max-children <n>`, `--tui` and one optional
    /// positional output path. Later flags override earlier ones; a second
    /// positional argument is rejected.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut output_seen = false;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--unbounded" => config.child_limit = ChildLimit::Unbounded,
                "--max-children" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    let max = value
                        .parse::<usize>()
                        .ok()
                        .filter(|&n| n > 0)
                        .ok_or(ConfigError::InvalidLimit(value))?;
                    config.child_limit = ChildLimit::Capped(max);
                }
                "--tui" => config.interactive = true,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                _ if output_seen => return Err(ConfigError::UnexpectedArgument(arg)),
                _ => {
                    config.output_path = PathBuf::from(arg);
                    output_seen = true;
                }
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
        assert_eq!(config.child_limit, ChildLimit::Capped(4));
        assert_eq!(config.output_path, PathBuf::from("syntax_tree.txt"));
    }

    #[test]
    fn test_flags() {
        let config = Config::from_args(["out.txt", "--tui", "--unbounded"]).unwrap();
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
        assert!(config.interactive);
        assert_eq!(config.child_limit, ChildLimit::Unbounded);

        let config = Config::from_args(["--max-children", "8"]).unwrap();
        assert_eq!(config.child_limit, ChildLimit::Capped(8));
    }

    #[test]
    fn test_rejected_args() {
        assert_eq!(
            Config::from_args(["--verbose"]),
            Err(ConfigError::UnknownFlag("--verbose".to_string()))
        );
        assert_eq!(
            Config::from_args(["--max-children"]),
            Err(ConfigError::MissingValue("--max-children".to_string()))
        );
        assert_eq!(
            Config::from_args(["first.txt", "--tui", "second.txt"]),
            Err(ConfigError::UnexpectedArgument("second.txt".to_string()))
        );
        assert_eq!(
            Config::from_args(["--max-children", "0"]),
            Err(ConfigError::InvalidLimit("0".to_string()))
        );
    }
}
