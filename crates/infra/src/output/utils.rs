// crates/infra/src/output/utils.rs

/// Column headers shared by the table and delimited writers.
pub(crate) const COLUMN_HEADERS: [&str; 6] =
    ["Type", "Path", "Creation Date", "Modification Date", "Size", "Hash (SHA-256)"];

pub(crate) fn column_widths(rows: &[[String; 6]]) -> [usize; 6] {
    let mut widths = COLUMN_HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }
    widths
}

pub(crate) fn escape_field(s: &str, sep: char) -> String {
    if sep == ',' {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
