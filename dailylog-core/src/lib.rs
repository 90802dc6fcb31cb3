//! Core library for DailyLog — a local-first daily logging tool.
//!
//! A DailyLog user appends timestamped entries to a single plain-text log file
//! of their choosing. Entry is sped up by reusable [`Shortcut`]s (label →
//! snippet with a declared cursor-landing offset) kept in a small SQLite
//! database, and writes are gated by a content fingerprint so unchanged text
//! is never rewritten ([`LogDocument::smart_save`]).
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    document::{FsLogStore, LogDocument, LogStore},
    entry::{append_entry, format_entry, validate_date_format},
    error::{DailylogError, Result},
    expansion::{expand, Expansion},
    fingerprint::{fingerprint, SaveGate},
    settings::{
        config_dir, load_settings, save_settings, settings_file_path, shortcuts_db_path,
        AppSettings, DEFAULT_DATE_FORMAT,
    },
    shortcut::{Shortcut, ShortcutKind},
    storage::Storage,
    store::{BulkAddReport, ShortcutStore},
    transfer::{
        export_shortcuts, export_shortcuts_to_path, import_shortcuts, import_shortcuts_from_path,
        import_shortcuts_into, ImportReport,
    },
};
