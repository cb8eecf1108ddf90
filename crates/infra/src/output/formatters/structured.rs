// crates/infra/src/output/formatters/structured.rs
use std::io::Write;

use dirlist_domain::model::ReportOutput;
use dirlist_shared_kernel::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    entries: Vec<JsonRecord>,
    summary: JsonSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<JsonSkipped>,
}

/// One report row. Cells are emitted verbatim as strings so that the
/// sentinel values ("-" and the empty hash) survive into the document.
#[derive(Serialize)]
struct JsonRecord {
    #[serde(rename = "type")]
    category: String,
    path: String,
    created: String,
    modified: String,
    size: String,
    hash: String,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    folders: usize,
    entries: usize,
}

#[derive(Serialize)]
struct JsonSkipped {
    path: String,
    reason: String,
}

pub fn output_json(report: &ReportOutput, out: &mut impl Write) -> Result<()> {
    let output = build_json_report(report);
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

fn build_json_report(report: &ReportOutput) -> JsonReport {
    let entries = report
        .records
        .iter()
        .map(|record| {
            let [category, path, created, modified, size, hash] = record.cells();
            JsonRecord { category, path, created, modified, size, hash }
        })
        .collect();

    let summary = JsonSummary {
        files: report.file_count(),
        folders: report.folder_count(),
        entries: report.records.len(),
    };

    let skipped = report
        .skipped
        .iter()
        .map(|skip| JsonSkipped {
            path: skip.path.display().to_string(),
            reason: skip.reason.clone(),
        })
        .collect();

    JsonReport { version: env!("CARGO_PKG_VERSION"), entries, summary, skipped }
}
