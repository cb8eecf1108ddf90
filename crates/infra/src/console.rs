// crates/infra/src/console.rs
use dirlist_ports::notify::Notifier;

/// Stderr-backed notifier. Progress lines honour `--quiet`; warnings are
/// always printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    fn warn(&self, message: &str) {
        warn_msg(message);
    }
}

// Lightweight warning helper so we can centralize stderr usage and later
// replace with a structured logger (tracing/log) if desired.
fn warn_msg(msg: &str) {
    eprintln!("[warn] {}", msg);
}
