use crate::app::render;
use crate::core::report::SequenceReport;
use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::{validate_count, validate_formats};

pub const OUTPUT_BASENAME: &str = "lucas_report";

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: SequenceReport,
    pub written: Vec<String>,
}

pub struct ReportEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run(&self) -> Result<RunSummary> {
        let count = validate_count(self.config.count())?;
        let formats = validate_formats("formats", self.config.output_formats())?;

        tracing::info!("Generating {} Lucas numbers", count);
        let report = SequenceReport::generate(count)?;
        tracing::info!(
            "Generated {} entries, {} of the form w^3 + 1",
            report.entries.len(),
            report.match_count()
        );

        for m in report.matches() {
            tracing::debug!(
                index = m.entry.index,
                value = m.entry.value,
                witness = ?m.cube.witness,
                "cube-plus-one match"
            );
        }

        let mut written = Vec::with_capacity(formats.len());
        for format in formats {
            let data = render::render(format, &report, self.config.matches_only())?;
            let file_name = format!("{}.{}", OUTPUT_BASENAME, format.extension());

            tracing::debug!("Writing {} output ({} bytes)", format, data.len());
            let path = self.storage.write_file(&file_name, &data)?;
            tracing::info!("📁 {} output saved to: {}", format, path);
            written.push(path);
        }

        Ok(RunSummary { report, written })
    }
}
