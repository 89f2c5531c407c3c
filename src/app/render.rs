use crate::core::report::SequenceReport;
use crate::domain::model::OutputFormat;
use crate::utils::error::{LucasError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub fn render(format: OutputFormat, report: &SequenceReport, matches_only: bool) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Text => Ok(render_text(report, matches_only).into_bytes()),
        OutputFormat::Csv => render_csv(report),
        OutputFormat::Json => Ok(render_json(report)?.into_bytes()),
    }
}

/// 與原本的主控台輸出格式一致
pub fn render_text(report: &SequenceReport, matches_only: bool) -> String {
    let mut out = String::new();

    if !matches_only {
        out.push_str("Results:\n");
        for e in &report.entries {
            out.push_str(&format!("{}\n", e.entry));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Among the first {} Lucas numbers, those that equal w^3 + 1:\n",
        report.count
    ));

    let mut found_any = false;
    for m in report.matches() {
        if let Some(w) = m.cube.witness {
            out.push_str(&format!(
                "Index {}: {} = {}^3 + 1\n",
                m.entry.index, m.entry.value, w
            ));
            found_any = true;
        }
    }

    if !found_any {
        out.push_str(&format!(
            "None of the first {} Lucas numbers can be expressed as w^3 + 1.\n",
            report.count
        ));
    }

    out
}

#[derive(Serialize)]
struct CsvRow {
    index: u32,
    value: i64,
    is_cube_plus_one: bool,
    witness: Option<u64>,
}

pub fn render_csv(report: &SequenceReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for e in &report.entries {
        writer.serialize(CsvRow {
            index: e.entry.index,
            value: e.entry.value,
            is_cube_plus_one: e.cube.is_cube_plus_one,
            witness: e.cube.witness,
        })?;
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| LucasError::IoError(std::io::Error::other(e.to_string())))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    count: u32,
    generated_at: &'a DateTime<Utc>,
    entries: &'a [crate::domain::model::ReportEntry],
    matches: Vec<u32>,
}

pub fn render_json(report: &SequenceReport) -> Result<String> {
    let doc = JsonReport {
        count: report.count,
        generated_at: &report.generated_at,
        entries: &report.entries,
        matches: report.matches().map(|m| m.entry.index).collect(),
    };

    Ok(serde_json::to_string_pretty(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output_for_five_terms() {
        let report = SequenceReport::generate(5).unwrap();
        let text = render_text(&report, false);

        let expected = "Results:\n\
Lucas number at index 1 is 1\n\
Lucas number at index 2 is 3\n\
Lucas number at index 3 is 4\n\
Lucas number at index 4 is 7\n\
Lucas number at index 5 is 11\n\
\n\
Among the first 5 Lucas numbers, those that equal w^3 + 1:\n\
Index 1: 1 = 0^3 + 1\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_output_matches_only() {
        let report = SequenceReport::generate(3).unwrap();
        let text = render_text(&report, true);
        assert!(!text.contains("Results:"));
        assert!(text.starts_with("Among the first 3 Lucas numbers"));
    }

    #[test]
    fn test_text_output_without_matches() {
        let mut report = SequenceReport::generate(4).unwrap();
        report.entries.remove(0);
        let text = render_text(&report, true);
        assert!(text.contains("None of the first 4 Lucas numbers can be expressed as w^3 + 1."));
    }

    #[test]
    fn test_csv_output() {
        let report = SequenceReport::generate(3).unwrap();
        let csv = String::from_utf8(render_csv(&report).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "index,value,is_cube_plus_one,witness",
                "1,1,true,0",
                "2,3,false,",
                "3,4,false,",
            ]
        );
    }

    #[test]
    fn test_json_output() {
        let report = SequenceReport::generate(6).unwrap();
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 6);
        assert_eq!(value["matches"], serde_json::json!([1]));
        assert_eq!(value["entries"][5]["index"], 6);
        assert_eq!(value["entries"][5]["value"], 18);
        assert_eq!(value["entries"][0]["witness"], 0);
        assert!(value["entries"][1]["witness"].is_null());
    }
}
