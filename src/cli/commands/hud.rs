use super::audit;
use super::calc::render;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notifier::TerminalNotifier;
use crate::core::session::{Field, Session};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::colors::{BOLD, RESET, YELLOW};
use crate::utils::formatting::progress_bar;
use crate::utils::time::split_clock_arg;
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const HELP: &str = "\
Commands:
  worked H:M          set the time already worked
  in H:M              set the last entry time
  set <field> <val>   set one field (worked-h, worked-m, in-h, in-m)
  calc                compute the release time
  arm                 arm the alert before the release time
  wait                block until the armed alert fires
  status              show inputs, sync rate and alert state
  help                this text
  quit                leave (a pending alert is cancelled)";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Hud<'a> {
    cfg: &'a Config,
    session: Session,
    notifier: Arc<TerminalNotifier>,
}

impl<'a> Hud<'a> {
    fn new(cfg: &'a Config) -> Self {
        Self {
            cfg,
            session: Session::new(cfg.calc_options()),
            notifier: Arc::new(TerminalNotifier::new(cfg.notifications)),
        }
    }

    fn set_pair(&mut self, hours: Field, minutes: Field, arg: Option<&str>) -> AppResult<()> {
        let (h, m) = split_clock_arg(arg)?;
        self.session.set_field(hours, &h);
        self.session.set_field(minutes, &m);
        Ok(())
    }

    fn set_one(&mut self, field: Option<&str>, value: Option<&str>) -> AppResult<()> {
        let field: Field = field
            .ok_or_else(|| AppError::InvalidField(String::new()))?
            .parse()?;
        let value = value.unwrap_or("");

        if !self.session.set_field(field, value) {
            warning(format!("'{}' ignored: at most two characters", value));
        }
        Ok(())
    }

    fn status(&self) {
        let inputs = self.session.inputs();
        let pending = if self.session.has_pending_alert() {
            " (alert pending)"
        } else {
            ""
        };
        println!("  state     : {}{}", self.session.state(), pending);
        println!(
            "  fields    : worked {}:{}  in {}:{}",
            inputs.completed_hours,
            inputs.completed_minutes,
            inputs.last_entry_hours,
            inputs.last_entry_minutes
        );
        println!("  sync rate : {}", progress_bar(self.session.sync_rate(), 20));
        if let Some(r) = self.session.result() {
            println!("  release   : {YELLOW}{BOLD}{}{RESET}", r.formatted);
        }
    }

    fn arm(&mut self) -> AppResult<()> {
        let offset = self.cfg.notify_offset_minutes;
        let now = Local::now().naive_local();
        let summary = self.session.arm(now, offset, self.notifier.clone())?;

        let target = summary.target.format("%H:%M").to_string();
        audit(
            self.cfg,
            "arm",
            &target,
            &format!("Alert armed {} minutes before {}", offset, summary.target),
        );

        match summary.notify_at {
            Some(at) => success(format!(
                "Alert armed: {} (fires at {})",
                target,
                at.format("%H:%M")
            )),
            None => {
                audit(self.cfg, "notify", &target, "Fired immediately");
                success(format!("Alert fired: release at {}", target));
            }
        }
        Ok(())
    }

    fn execute(&mut self, line: &str) -> AppResult<Flow> {
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            return Ok(Flow::Continue);
        };

        match cmd.to_lowercase().as_str() {
            "worked" => {
                self.set_pair(Field::CompletedHours, Field::CompletedMinutes, words.next())?
            }
            "in" => self.set_pair(Field::LastEntryHours, Field::LastEntryMinutes, words.next())?,
            "set" => self.set_one(words.next(), words.next())?,
            "calc" => {
                let inputs = self.session.inputs().clone();
                let opts = self.cfg.calc_options();
                let result = self.session.calculate().clone();
                if !result.is_valid {
                    warning("Standby: no values entered.");
                }
                println!("{}", render(&inputs, &result, &opts));
            }
            "arm" => self.arm()?,
            "wait" => {
                if self.session.wait_alert() {
                    audit(self.cfg, "notify", "", "Fired on schedule");
                } else {
                    info("No pending alert.");
                }
            }
            "status" => self.status(),
            "help" | "?" => println!("{}", HELP),
            "quit" | "exit" => return Ok(Flow::Quit),
            other => warning(format!("Unknown command '{}', try 'help'", other)),
        }

        Ok(Flow::Continue)
    }
}

/// Handle the `hud` command: a line-oriented session on stdin.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Hud) {
        return Ok(());
    }

    header("rClockout HUD");
    println!("{}\n", HELP);

    let mut hud = Hud::new(cfg);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("rclockout> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match hud.execute(line.trim()) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            // session errors are reported, the loop goes on
            Err(e) => error(e),
        }
    }

    if hud.session.has_pending_alert() {
        audit(cfg, "cancel", "", "Pending alert cancelled on exit");
        info("Pending alert cancelled.");
    }

    Ok(())
}
