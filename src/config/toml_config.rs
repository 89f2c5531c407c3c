use crate::utils::error::{LucasError, Result};
use crate::utils::validation::{validate_count, validate_formats, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub run: RunSection,
    pub output: Option<OutputSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSection {
    pub count: Option<i64>,
    pub matches_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
    pub formats: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub format: Option<String>, // "compact" or "json"
}

const LOG_FORMATS: [&str; 2] = ["compact", "json"];

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern compiles"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LucasError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LUCAS_COUNT})，未設定的保留原文
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// `[logging]` 沒有對應的 CLI 覆寫，需單獨檢查
    pub fn validate_logging(&self) -> Result<()> {
        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            if !LOG_FORMATS.contains(&format.to_ascii_lowercase().as_str()) {
                return Err(LucasError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: format!("Valid log formats: {}", LOG_FORMATS.join(", ")),
                });
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(count) = self.run.count {
            validate_count(count)?;
        }

        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                validate_path("output.path", path)?;
            }
            if let Some(formats) = &output.formats {
                validate_formats("output.formats", formats)?;
            }
        }

        self.validate_logging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[run]
count = 10
matches_only = false

[output]
path = "./reports"
formats = ["csv", "json"]

[logging]
verbose = true
format = "compact"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.run.count, Some(10));
        let output = config.output.as_ref().unwrap();
        assert_eq!(output.path.as_deref(), Some("./reports"));
        assert_eq!(output.formats.as_ref().unwrap().len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.run.count.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LUCAS_CUBE_TEST_OUTPUT", "/tmp/lucas");

        let toml_content = r#"
[output]
path = "${LUCAS_CUBE_TEST_OUTPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.output.unwrap().path.as_deref(),
            Some("/tmp/lucas")
        );

        std::env::remove_var("LUCAS_CUBE_TEST_OUTPUT");
    }

    #[test]
    fn test_validation_errors() {
        let negative = TomlConfig::from_toml_str("[run]\ncount = -1\n").unwrap();
        assert!(matches!(
            negative.validate(),
            Err(LucasError::InvalidCount { value: -1 })
        ));

        let too_large = TomlConfig::from_toml_str("[run]\ncount = 500\n").unwrap();
        assert!(matches!(
            too_large.validate(),
            Err(LucasError::Overflow { .. })
        ));

        let bad_format = TomlConfig::from_toml_str("[output]\nformats = [\"xml\"]\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_logging = TomlConfig::from_toml_str("[logging]\nformat = \"pretty\"\n").unwrap();
        assert!(bad_logging.validate().is_err());
        assert!(bad_logging.validate_logging().is_err());
        assert!(negative.validate_logging().is_ok());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[run\ncount = 3"),
            Err(LucasError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[run]\ncount = 4\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.run.count, Some(4));
    }
}
