use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Distinguishes what a shortcut's `text` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutKind {
    /// `text` is inserted verbatim.
    Text,
    /// `text` is a strftime format; the current time rendered with it is inserted.
    Timestamp,
}

impl ShortcutKind {
    /// The tag stored in the database and in CSV exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortcutKind::Text => "text",
            ShortcutKind::Timestamp => "timestamp",
        }
    }

    /// Parses a stored tag. Returns `None` for unknown tags so callers can
    /// report the bad value in context (row index, database column).
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(ShortcutKind::Text),
            "timestamp" => Some(ShortcutKind::Timestamp),
            _ => None,
        }
    }
}

/// A named, reusable snippet insertable into the log at the cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Unique key, shown on the shortcut tray.
    pub label: String,
    /// Snippet body, or a strftime format for [`ShortcutKind::Timestamp`].
    pub text: String,
    /// Char offset into `text` where the cursor lands after insertion.
    /// Out-of-range values (including the conventional `-1`) land at the end.
    pub cursor: i64,
    pub kind: ShortcutKind,
    /// User-defined ordering, rewritten as a block on reorder.
    pub position: i32,
}

impl Shortcut {
    /// Materialises the snippet to insert at `now`.
    ///
    /// `Text` shortcuts return their body as-is; `Timestamp` shortcuts render
    /// `now` with their body as the format string. The caller should have
    /// validated the format when the shortcut was created.
    pub fn resolve(&self, now: DateTime<Local>) -> Shortcut {
        match self.kind {
            ShortcutKind::Text => self.clone(),
            ShortcutKind::Timestamp => {
                let rendered = crate::core::entry::render_timestamp(now, &self.text)
                    .unwrap_or_else(|_| self.text.clone());
                Shortcut {
                    text: rendered,
                    kind: ShortcutKind::Text,
                    ..self.clone()
                }
            }
        }
    }
}
