//! Time utilities for the CLI layer: splitting `H:M` arguments into the raw
//! calculator fields.

use crate::core::session::MAX_FIELD_LEN;
use crate::errors::{AppError, AppResult};

/// Split an `H:M` argument into its raw hour and minute text.
///
/// The pieces are not parsed here: the calculator reads them leniently.
/// Missing pieces stay empty, so `"7"` is `("7", "")` and `":30"` is
/// `("", "30")`. Each piece is capped at two characters.
pub fn split_clock_arg(arg: Option<&str>) -> AppResult<(String, String)> {
    let Some(raw) = arg else {
        return Ok((String::new(), String::new()));
    };

    let raw = raw.trim();
    let (h, m) = raw.split_once(':').unwrap_or((raw, ""));
    let (h, m) = (h.trim(), m.trim());

    if h.chars().count() > MAX_FIELD_LEN || m.chars().count() > MAX_FIELD_LEN {
        return Err(AppError::InvalidTime(format!(
            "'{}' (at most {} characters per field)",
            raw, MAX_FIELD_LEN
        )));
    }

    Ok((h.to_string(), m.to_string()))
}
