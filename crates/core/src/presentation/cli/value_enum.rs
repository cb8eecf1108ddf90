use clap::{ValueEnum, builder::PossibleValue};

use dirlist_domain::options::OutputFormat;

/// CLI-facing mirror of the domain [`OutputFormat`].
///
/// The domain crate stays free of clap, so the `ValueEnum` impl lives on
/// this local twin and conversion happens at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Table,
    Csv,
    Tsv,
    Json,
}

impl ValueEnum for FormatArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[FormatArg::Table, FormatArg::Csv, FormatArg::Tsv, FormatArg::Json]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            FormatArg::Table => PossibleValue::new("table"),
            FormatArg::Csv => PossibleValue::new("csv"),
            FormatArg::Tsv => PossibleValue::new("tsv"),
            FormatArg::Json => PossibleValue::new("json"),
        };
        Some(value)
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Tsv => OutputFormat::Tsv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
