pub mod calc;
pub mod config;
pub mod hud;
pub mod init;
pub mod log;
pub mod notify;

use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::ui::messages::warning;

/// Write an internal log line. Failures are reported but never fatal.
pub(crate) fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    let result = DbPool::new(cfg.database_path())
        .and_then(|pool| ttlog(&pool.conn, operation, target, message));

    if let Err(e) = result {
        warning(format!("Failed to write internal log: {}", e));
    }
}
