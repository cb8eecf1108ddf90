// crates/core/src/bootstrap.rs
use anyhow::Result;

use dirlist_domain::{analytics::sort::apply_sort_with_config, config::Config};
use dirlist_infra::{
    categories, console::ConsoleNotifier, filesystem::FsDirectoryScanner,
    hashing::Sha256FileHasher, output,
};
use dirlist_ports::notify::Notifier;
use dirlist_shared_kernel::error::{ApplicationError, DirlistError, PresentationError};
use dirlist_usecase::{BuildReport, ReportRequest};

use crate::presentation::cli;

/// CLI entry point: parse arguments, then run.
pub fn run() -> Result<()> {
    let config = cli::load_config();
    run_with_config(config)
}

/// Assemble the adapters and produce one report for `config`.
pub fn run_with_config(config: Config) -> Result<()> {
    if !config.root.is_dir() {
        return Err(DirlistError::from(PresentationError::NotADirectory {
            path: config.root.clone(),
        })
        .into());
    }

    let categories = match &config.types_file {
        Some(path) => categories::load_from_file(path)?,
        None => categories::load_default()?,
    };

    let scanner = FsDirectoryScanner::new();
    let hasher = Sha256FileHasher::new();
    let notifier = ConsoleNotifier::new(config.quiet);
    notifier.info(&format!("dirlist v{} · {}", crate::VERSION, config.root.display()));

    let request = ReportRequest::from(&config);
    let mut report = BuildReport::new(&scanner, &hasher, &notifier).run(&request, &categories)?;
    apply_sort_with_config(&mut report.records, &config);

    output::emit(&report, &config).map_err(|err| {
        DirlistError::from(ApplicationError::PresentationFailed {
            reason: "writing the report".to_string(),
            source: Some(Box::new(err)),
        })
    })?;

    if let Some(path) = &config.output {
        notifier.info(&format!("report written to {}", path.display()));
    }

    Ok(())
}
