pub mod formatters;
mod utils;
mod writer;

use std::io::Write;

use dirlist_domain::{config::Config, model::ReportOutput, options::OutputFormat};
use dirlist_shared_kernel::Result;
use formatters::{output_delimited, output_json, output_table};

/// Emit the report to the configured output format.
pub fn emit(report: &ReportOutput, config: &Config) -> Result<()> {
    let mut writer = writer::OutputWriter::create(config)?;
    match config.format {
        OutputFormat::Json => output_json(report, &mut writer)?,
        OutputFormat::Csv => output_delimited(report, ',', &mut writer)?,
        OutputFormat::Tsv => output_delimited(report, '\t', &mut writer)?,
        OutputFormat::Table => output_table(report, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}
