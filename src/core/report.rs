use crate::core::{cube, lucas};
use crate::domain::model::ReportEntry;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceReport {
    pub count: u32,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
}

impl SequenceReport {
    /// 產生前 `count` 項並逐項檢查 w^3 + 1
    pub fn generate(count: u32) -> Result<Self> {
        let entries = lucas::entries(count)?
            .into_iter()
            .map(|entry| ReportEntry {
                entry,
                cube: cube::check(entry.value),
            })
            .collect();

        Ok(Self {
            count,
            generated_at: Utc::now(),
            entries,
        })
    }

    pub fn matches(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.cube.is_cube_plus_one)
    }

    pub fn match_count(&self) -> usize {
        self.matches().count()
    }
}
