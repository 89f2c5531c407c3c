pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_count, validate_formats, validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "lucas-cube")]
#[command(about = "Lists Lucas numbers and finds those of the form w^3 + 1")]
pub struct CliConfig {
    /// Number of terms to generate (prompted for when omitted)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Path to a TOML run configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory for file outputs
    #[arg(short, long)]
    pub output_path: Option<String>,

    /// Comma-separated file formats to write: text, csv, json
    #[arg(short, long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Only print the w^3 + 1 section
    #[arg(long)]
    pub matches_only: bool,

    /// Print the full listing even if the config file sets matches_only
    #[arg(long, conflicts_with = "matches_only")]
    pub no_matches_only: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// CLI 與 TOML 合併後的設定，CLI 優先
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub count: Option<i64>,
    pub output_path: String,
    pub formats: Vec<String>,
    pub matches_only: bool,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: None,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            formats: Vec::new(),
            matches_only: false,
            verbose: false,
            json_logs: false,
        }
    }
}

impl RunConfig {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let output = file.output.as_ref();
        let logging = file.logging.as_ref();

        Self {
            count: file.run.count,
            output_path: output
                .and_then(|o| o.path.clone())
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            formats: output.and_then(|o| o.formats.clone()).unwrap_or_default(),
            matches_only: file.run.matches_only.unwrap_or(false),
            verbose: logging.and_then(|l| l.verbose).unwrap_or(false),
            json_logs: logging
                .and_then(|l| l.format.as_deref())
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    #[cfg(feature = "cli")]
    pub fn merge(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let base = file.map(Self::from_toml).unwrap_or_default();

        Self {
            count: cli.count.or(base.count),
            output_path: cli.output_path.clone().unwrap_or(base.output_path),
            formats: if cli.formats.is_empty() {
                base.formats
            } else {
                cli.formats.clone()
            },
            matches_only: !cli.no_matches_only && (cli.matches_only || base.matches_only),
            verbose: cli.verbose || base.verbose,
            json_logs: cli.json_logs || base.json_logs,
        }
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        if let Some(count) = self.count {
            validate_count(count)?;
        }
        validate_path("output_path", &self.output_path)?;
        validate_formats("formats", &self.formats)?;
        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn count(&self) -> i64 {
        self.count.unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn matches_only(&self) -> bool {
        self.matches_only
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::LucasError;

    #[test]
    fn test_cli_parsing() {
        let cli = CliConfig::parse_from([
            "lucas-cube",
            "-n",
            "12",
            "--formats",
            "csv,json",
            "--matches-only",
        ]);
        assert_eq!(cli.count, Some(12));
        assert_eq!(cli.formats, vec!["csv".to_string(), "json".to_string()]);
        assert!(cli.matches_only);
        assert!(cli.output_path.is_none());
    }

    #[test]
    fn test_cli_accepts_negative_count() {
        let cli = CliConfig::parse_from(["lucas-cube", "--count", "-3"]);
        assert_eq!(cli.count, Some(-3));
    }

    #[test]
    fn test_cli_overrides_toml() {
        let file = TomlConfig::from_toml_str(
            r#"
[run]
count = 20
matches_only = true

[output]
path = "./from-file"
formats = ["json"]

[logging]
verbose = true
format = "json"
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from(["lucas-cube", "-n", "7", "-o", "./from-cli"]);
        let merged = RunConfig::merge(&cli, Some(&file));

        assert_eq!(merged.count, Some(7));
        assert_eq!(merged.output_path, "./from-cli");
        assert_eq!(merged.formats, vec!["json".to_string()]);
        assert!(merged.matches_only);
        assert!(merged.verbose);
        assert!(merged.json_logs);
    }

    #[test]
    fn test_cli_values_replace_invalid_file_values() {
        let file = TomlConfig::from_toml_str(
            r#"
[run]
count = 500

[output]
formats = ["xml"]
"#,
        )
        .unwrap();
        assert!(file.validate().is_err());

        let cli = CliConfig::parse_from(["lucas-cube", "-n", "5", "-f", "csv"]);
        let merged = RunConfig::merge(&cli, Some(&file));
        assert_eq!(merged.count, Some(5));
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn test_invalid_file_values_fail_when_not_overridden() {
        let file = TomlConfig::from_toml_str("[run]\ncount = 500\n").unwrap();
        let cli = CliConfig::parse_from(["lucas-cube"]);
        let merged = RunConfig::merge(&cli, Some(&file));
        assert!(matches!(
            merged.validate(),
            Err(LucasError::Overflow { index: 500 })
        ));

        let negative = RunConfig::default().with_count(-2);
        assert!(matches!(
            negative.validate(),
            Err(LucasError::InvalidCount { value: -2 })
        ));
    }

    #[test]
    fn test_no_matches_only_overrides_file() {
        let file = TomlConfig::from_toml_str("[run]\nmatches_only = true\n").unwrap();

        let cli = CliConfig::parse_from(["lucas-cube"]);
        assert!(RunConfig::merge(&cli, Some(&file)).matches_only);

        let cli = CliConfig::parse_from(["lucas-cube", "--no-matches-only"]);
        assert!(!RunConfig::merge(&cli, Some(&file)).matches_only);

        assert!(CliConfig::try_parse_from([
            "lucas-cube",
            "--matches-only",
            "--no-matches-only"
        ])
        .is_err());
    }

    #[test]
    fn test_defaults_without_file() {
        let cli = CliConfig::parse_from(["lucas-cube"]);
        let merged = RunConfig::merge(&cli, None);
        assert_eq!(merged, RunConfig::default());
        assert_eq!(merged.count(), 0);
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_format() {
        let config = RunConfig {
            formats: vec!["yaml".to_string()],
            ..RunConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
