use crate::cli::parser::{Commands, TimeArgs};
use crate::config::Config;
use crate::core::calculator::{
    CalcOptions, CalculationInputs, CalculationResult, Normalization, compute_with,
};
use crate::core::display::{ClockAngles, Status, sync_rate};
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{BOLD, CYAN, RESET, colorize_optional};
use crate::utils::formatting::{pad_right, progress_bar};
use crate::utils::time::split_clock_arg;

/// Build the raw calculator fields from `--worked` / `--last-in`.
pub fn inputs_from(time: &TimeArgs) -> AppResult<CalculationInputs> {
    let (ch, cm) = split_clock_arg(time.worked.as_deref())?;
    let (lh, lm) = split_clock_arg(time.last_in.as_deref())?;
    Ok(CalculationInputs::new(ch, cm, lh, lm))
}

/// Configured options, with `--modular` taking precedence.
pub fn options_for(time: &TimeArgs, cfg: &Config) -> CalcOptions {
    let mut opts = cfg.calc_options();
    if time.modular {
        opts.normalization = Normalization::Modular;
    }
    opts
}

fn field_pair(h: &str, m: &str) -> String {
    if h.is_empty() && m.is_empty() {
        colorize_optional("")
    } else {
        format!("{}:{}", colorize_optional(h), colorize_optional(m))
    }
}

/// Human-readable report of a calculation.
pub fn render(
    inputs: &CalculationInputs,
    result: &CalculationResult,
    opts: &CalcOptions,
) -> String {
    let rate = sync_rate(inputs, opts.baseline_hours);
    let angles = ClockAngles::from_result(Some(result));
    let status = Status::from_rate(rate);

    let rows = [
        (
            "Worked",
            field_pair(&inputs.completed_hours, &inputs.completed_minutes),
        ),
        (
            "Last in",
            field_pair(&inputs.last_entry_hours, &inputs.last_entry_minutes),
        ),
        (
            "Release",
            format!("{CYAN}{BOLD}{}{RESET}", result.formatted),
        ),
        ("Sync rate", progress_bar(rate, 20)),
        ("Status", status.to_string()),
        (
            "Clock",
            format!("hour {:.1}°  minute {:.1}°", angles.hour, angles.minute),
        ),
    ];

    rows.iter()
        .map(|(label, value)| format!("  {} : {}", pad_right(label, 9), value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc { time, json } = cmd {
        let inputs = inputs_from(time)?;
        let opts = options_for(time, cfg);
        let result = compute_with(&inputs, &opts);

        if *json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        header("Release time");
        if !result.is_valid {
            warning("Standby: no values entered, showing the bare baseline.");
        }
        println!("{}", render(&inputs, &result, &opts));
    }

    Ok(())
}
