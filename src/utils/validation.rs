use crate::core::lucas::MAX_INDEX;
use crate::domain::model::OutputFormat;
use crate::utils::error::{LucasError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 邊界層檢查 N：必須為正數，且不超過 i64 可表示的最大索引
pub fn validate_count(value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(LucasError::InvalidCount { value });
    }

    match u32::try_from(value) {
        Ok(count) if count <= MAX_INDEX => Ok(count),
        Ok(count) => Err(LucasError::Overflow { index: count }),
        Err(_) => Err(LucasError::Overflow {
            index: MAX_INDEX + 1,
        }),
    }
}

/// 解析互動輸入的一行文字
pub fn parse_count(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|e| LucasError::InvalidInput {
            input: trimmed.to_string(),
            reason: e.to_string(),
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LucasError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LucasError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_formats(field_name: &str, formats: &[String]) -> Result<Vec<OutputFormat>> {
    let mut parsed = Vec::with_capacity(formats.len());

    for raw in formats {
        let format = raw.parse::<OutputFormat>().map_err(|reason| {
            LucasError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: raw.clone(),
                reason,
            }
        })?;
        if !parsed.contains(&format) {
            parsed.push(format);
        }
    }

    Ok(parsed)
}
