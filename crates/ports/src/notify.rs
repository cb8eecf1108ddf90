// crates/ports/src/notify.rs

/// Port for user-facing status output.
///
/// `info` carries progress and summary lines; `warn` carries recoverable
/// problems such as entries skipped during a keep-going run.
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}
