use crate::core::Storage;
use crate::utils::error::{LucasError, Result};
use crate::utils::validation::parse_count;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

pub const PROMPT: &str = "Enter number of terms (N > 0):";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

/// 互動模式：提示並讀取一行 N
pub fn prompt_count<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<i64> {
    writeln!(writer, "{}", PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(LucasError::InvalidInput {
            input: String::new(),
            reason: "no input provided".to_string(),
        });
    }

    parse_count(&line)
}
