//! Timestamped log entries and date-format validation.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::core::error::{DailylogError, Result};

/// Checks that `fmt` is a strftime string chrono can render.
///
/// Rejecting up front lets the settings UI flag a bad format when it is
/// entered instead of failing on every subsequent entry.
pub fn validate_date_format(fmt: &str) -> Result<()> {
    let invalid = StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error));
    if invalid {
        return Err(DailylogError::InvalidDateFormat(fmt.to_string()));
    }
    Ok(())
}

/// Renders `now` with `fmt`, validating the format first.
pub fn render_timestamp(now: DateTime<Local>, fmt: &str) -> Result<String> {
    validate_date_format(fmt)?;
    Ok(now.format(fmt).to_string())
}

/// Builds a log line: the rendered timestamp, a space, then `text`.
pub fn format_entry(now: DateTime<Local>, fmt: &str, text: &str) -> Result<String> {
    Ok(format!("{} {}", render_timestamp(now, fmt)?, text))
}

/// Appends `line` to `log` on a fresh line, keeping a trailing newline.
pub fn append_entry(log: &str, line: &str) -> String {
    if log.is_empty() {
        format!("{line}\n")
    } else if log.ends_with('\n') {
        format!("{log}{line}\n")
    } else {
        format!("{log}\n{line}\n")
    }
}
