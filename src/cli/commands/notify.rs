use super::audit;
use super::calc::{inputs_from, options_for, render};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compute_with;
use crate::core::notifier::TerminalNotifier;
use crate::core::scheduler::{self, Armed};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::mins2readable;
use chrono::Local;
use std::sync::Arc;

/// Arm the release alert and stay in the foreground until it fires.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify { time, offset } = cmd {
        let inputs = inputs_from(time)?;
        let opts = options_for(time, cfg);
        let result = compute_with(&inputs, &opts);
        let offset = offset.unwrap_or(cfg.notify_offset_minutes);

        header("Release time");
        println!("{}\n", render(&inputs, &result, &opts));

        let now = Local::now().naive_local();
        let notifier = Arc::new(TerminalNotifier::new(cfg.notifications));
        let armed = scheduler::arm(&result, now, offset, notifier)?;

        audit(
            cfg,
            "arm",
            &result.formatted,
            &format!("Alert armed {} minutes before {}", offset, armed.target()),
        );

        match armed {
            Armed::Fired { .. } => {
                audit(cfg, "notify", &result.formatted, "Fired immediately");
            }
            Armed::Scheduled {
                notify_at, handle, ..
            } => {
                let wait = (notify_at - now).num_minutes();
                info(format!(
                    "Alert armed for {} (in {}). Keep this terminal open.",
                    notify_at.format("%H:%M"),
                    mins2readable(wait, false)
                ));

                if handle.wait() {
                    audit(cfg, "notify", &result.formatted, "Fired on schedule");
                }
            }
        }

        success(format!("Release time: {}", result.formatted));
    }

    Ok(())
}
