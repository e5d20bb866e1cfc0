//! Terminal-side alert delivery.

use crate::core::scheduler::{Alert, Notifier, Permission};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{BOLD, RESET, YELLOW};
use std::io::Write;

const BELL: &str = "\x07";

/// Prints alerts on stdout and rings the terminal bell.
/// Permission comes from the `notifications` config key.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    allowed: bool,
}

impl TerminalNotifier {
    pub fn new(allowed: bool) -> Self {
        Self { allowed }
    }
}

impl Notifier for TerminalNotifier {
    fn request_permission(&self) -> Permission {
        if self.allowed {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    fn notify(&self, alert: &Alert) -> AppResult<()> {
        let mut out = std::io::stdout().lock();
        writeln!(
            out,
            "{BELL}🔔 {YELLOW}{BOLD}{}{RESET}: {}",
            alert.title, alert.body
        )
        .and_then(|_| out.flush())
        .map_err(|e| AppError::Notify(e.to_string()))
    }
}
