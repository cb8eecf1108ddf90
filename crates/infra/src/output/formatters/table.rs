use std::io::Write;

use dirlist_domain::model::ReportOutput;
use dirlist_shared_kernel::Result;

use crate::output::utils::{COLUMN_HEADERS, column_widths};

pub fn output_table(report: &ReportOutput, out: &mut impl Write) -> Result<()> {
    let rows: Vec<[String; 6]> = report.records.iter().map(|r| r.cells()).collect();
    let widths = column_widths(&rows);

    write_table_header(&widths, out)?;
    write_table_rows(&rows, &widths, out)?;
    output_summary(report, out)
}

fn write_table_header(widths: &[usize; 6], out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    write_row(&COLUMN_HEADERS.map(str::to_string), widths, out)?;
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    writeln!(out, "{}", "-".repeat(total))?;
    Ok(())
}

fn write_table_rows(rows: &[[String; 6]], widths: &[usize; 6], out: &mut impl Write) -> Result<()> {
    for row in rows {
        write_row(row, widths, out)?;
    }
    writeln!(out, "---")?;
    Ok(())
}

// Trailing padding is trimmed so blank cells never leave whitespace at the
// end of a line.
fn write_row(cells: &[String; 6], widths: &[usize; 6], out: &mut impl Write) -> Result<()> {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i + 1 == cells.len() {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{cell:<width$}  "));
        }
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

fn output_summary(report: &ReportOutput, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{} files, {} folders ({} entries)\n",
        report.file_count(),
        report.folder_count(),
        report.records.len()
    )?;
    Ok(())
}
