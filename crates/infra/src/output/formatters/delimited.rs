use std::io::Write;

use dirlist_domain::model::ReportOutput;
use dirlist_shared_kernel::Result;

use crate::output::utils::escape_field;

pub fn output_delimited(report: &ReportOutput, sep: char, out: &mut impl Write) -> Result<()> {
    write_delimited_header(sep, out)?;
    write_delimited_rows(report, sep, out)?;
    Ok(())
}

fn write_delimited_header(sep: char, out: &mut impl Write) -> Result<()> {
    writeln!(out, "type{sep}path{sep}created{sep}modified{sep}size{sep}hash")?;
    Ok(())
}

fn write_delimited_rows(report: &ReportOutput, sep: char, out: &mut impl Write) -> Result<()> {
    for record in &report.records {
        let [category, path, created, modified, size, hash] = record.cells();
        let path = escape_field(&path, sep);
        writeln!(out, "{category}{sep}{path}{sep}{created}{sep}{modified}{sep}{size}{sep}{hash}")?;
    }
    Ok(())
}
