use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One term of the sequence. `value` is fully determined by `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceEntry {
    pub index: u32,
    pub value: i64,
}

impl fmt::Display for SequenceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lucas number at index {} is {}", self.index, self.value)
    }
}

/// Result of testing a value for the form `w^3 + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeCheck {
    pub is_cube_plus_one: bool,
    pub witness: Option<u64>,
}

impl CubeCheck {
    pub fn found(witness: u64) -> Self {
        Self {
            is_cube_plus_one: true,
            witness: Some(witness),
        }
    }

    pub fn not_found() -> Self {
        Self {
            is_cube_plus_one: false,
            witness: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub entry: SequenceEntry,
    #[serde(flatten)]
    pub cube: CubeCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unsupported format '{}'. Valid formats: text, csv, json",
                other
            )),
        }
    }
}
