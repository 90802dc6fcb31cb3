//! CRUD and ordering over the shortcut table.
//!
//! Shortcuts are keyed by label and carry a user-defined `position` used for
//! the tray ordering. New shortcuts append at the tail; reordering rewrites
//! the whole position column in one transaction.

use std::collections::HashSet;
use std::path::Path;

use rusqlite::OptionalExtension;

use crate::core::error::{DailylogError, Result};
use crate::core::shortcut::{Shortcut, ShortcutKind};
use crate::core::storage::Storage;

/// Counts returned by [`ShortcutStore::bulk_add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulkAddReport {
    pub added: usize,
    pub updated: usize,
}

/// The shortcut collection backed by a [`Storage`] connection.
pub struct ShortcutStore {
    storage: Storage,
}

impl ShortcutStore {
    /// Opens or creates the store at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            storage: Storage::create(path)?,
        })
    }

    /// Opens an existing store at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            storage: Storage::open(path)?,
        })
    }

    /// Opens the store at `path` when the file exists, else bootstraps a new
    /// one. Going through [`Storage::open`] for existing files is what runs
    /// validation and schema migrations; frontends should prefer this over
    /// calling [`ShortcutStore::create`] unconditionally.
    pub fn open_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::open(path)
        } else {
            Self::create(path)
        }
    }

    /// Adds a new shortcut at the end of the tray ordering.
    ///
    /// # Errors
    ///
    /// Returns [`DailylogError::LabelExists`] when `label` is already taken.
    pub fn add(&mut self, label: &str, text: &str, cursor: i64, kind: ShortcutKind) -> Result<Shortcut> {
        if self.label_exists(label)? {
            return Err(DailylogError::LabelExists(label.to_string()));
        }

        let position: i32 = self.storage.connection().query_row(
            "SELECT COALESCE(MAX(position), -1) + 1 FROM shortcuts",
            [],
            |row| row.get(0),
        )?;

        self.storage.connection().execute(
            "INSERT INTO shortcuts (label, text, cursor, kind, position) VALUES (?, ?, ?, ?, ?)",
            rusqlite::params![label, text, cursor, kind.as_str(), position],
        )?;

        Ok(Shortcut {
            label: label.to_string(),
            text: text.to_string(),
            cursor,
            kind,
            position,
        })
    }

    /// Fetches a single shortcut by label.
    pub fn get(&self, label: &str) -> Result<Shortcut> {
        self.storage
            .connection()
            .query_row(
                "SELECT label, text, cursor, kind, position FROM shortcuts WHERE label = ?",
                [label],
                map_shortcut_row,
            )
            .optional()?
            .ok_or_else(|| DailylogError::ShortcutNotFound(label.to_string()))
    }

    /// True when a shortcut with `label` exists.
    pub fn label_exists(&self, label: &str) -> Result<bool> {
        let count: i64 = self.storage.connection().query_row(
            "SELECT COUNT(*) FROM shortcuts WHERE label = ?",
            [label],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Rewrites the text, cursor offset, and kind of an existing shortcut.
    ///
    /// # Errors
    ///
    /// Returns [`DailylogError::ShortcutNotFound`] when `label` is absent.
    pub fn update(&mut self, label: &str, text: &str, cursor: i64, kind: ShortcutKind) -> Result<()> {
        let changed = self.storage.connection().execute(
            "UPDATE shortcuts SET text = ?, cursor = ?, kind = ? WHERE label = ?",
            rusqlite::params![text, cursor, kind.as_str(), label],
        )?;
        if changed == 0 {
            return Err(DailylogError::ShortcutNotFound(label.to_string()));
        }
        Ok(())
    }

    /// Deletes the shortcut with `label`. Idempotent.
    pub fn remove(&mut self, label: &str) -> Result<()> {
        self.storage
            .connection()
            .execute("DELETE FROM shortcuts WHERE label = ?", [label])?;
        Ok(())
    }

    /// Returns all shortcuts in tray order.
    pub fn list(&self) -> Result<Vec<Shortcut>> {
        let mut stmt = self.storage.connection().prepare(
            "SELECT label, text, cursor, kind, position FROM shortcuts
             ORDER BY position ASC, label ASC",
        )?;
        let shortcuts = stmt
            .query_map([], map_shortcut_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(shortcuts)
    }

    /// Rewrites the position column so the tray shows `labels` in the given
    /// order. Every stored shortcut must appear exactly once in `labels`.
    pub fn update_positions(&mut self, labels: &[String]) -> Result<()> {
        let unique: HashSet<&str> = labels.iter().map(String::as_str).collect();
        if unique.len() != labels.len() {
            return Err(DailylogError::InvalidStore(
                "reorder lists a label more than once".to_string(),
            ));
        }

        let stored: i64 =
            self.storage
                .connection()
                .query_row("SELECT COUNT(*) FROM shortcuts", [], |row| row.get(0))?;
        if stored != labels.len() as i64 {
            return Err(DailylogError::InvalidStore(format!(
                "reorder lists {} labels but the store holds {stored}",
                labels.len()
            )));
        }

        let tx = self.storage.connection_mut().transaction()?;
        for (position, label) in labels.iter().enumerate() {
            let changed = tx.execute(
                "UPDATE shortcuts SET position = ? WHERE label = ?",
                rusqlite::params![position as i32, label],
            )?;
            if changed == 0 {
                return Err(DailylogError::ShortcutNotFound(label.clone()));
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Moves one shortcut to `index` within the tray order, shifting the rest.
    pub fn move_shortcut(&mut self, label: &str, index: usize) -> Result<()> {
        let mut labels: Vec<String> = self
            .list()?
            .into_iter()
            .map(|shortcut| shortcut.label)
            .collect();

        let from = labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| DailylogError::ShortcutNotFound(label.to_string()))?;
        let moved = labels.remove(from);
        labels.insert(index.min(labels.len()), moved);

        self.update_positions(&labels)
    }

    /// Inserts or updates a batch of shortcuts, as used by CSV import and the
    /// bulk-add flow. New labels append at the tail in batch order; existing
    /// labels keep their position and get new text, cursor, and kind.
    pub fn bulk_add(&mut self, shortcuts: &[Shortcut]) -> Result<BulkAddReport> {
        let mut report = BulkAddReport::default();

        let tx = self.storage.connection_mut().transaction()?;
        for shortcut in shortcuts {
            let exists: i64 = tx.query_row(
                "SELECT COUNT(*) FROM shortcuts WHERE label = ?",
                [&shortcut.label],
                |row| row.get(0),
            )?;

            if exists > 0 {
                tx.execute(
                    "UPDATE shortcuts SET text = ?, cursor = ?, kind = ? WHERE label = ?",
                    rusqlite::params![
                        shortcut.text,
                        shortcut.cursor,
                        shortcut.kind.as_str(),
                        shortcut.label
                    ],
                )?;
                report.updated += 1;
            } else {
                let position: i32 = tx.query_row(
                    "SELECT COALESCE(MAX(position), -1) + 1 FROM shortcuts",
                    [],
                    |row| row.get(0),
                )?;
                tx.execute(
                    "INSERT INTO shortcuts (label, text, cursor, kind, position)
                     VALUES (?, ?, ?, ?, ?)",
                    rusqlite::params![
                        shortcut.label,
                        shortcut.text,
                        shortcut.cursor,
                        shortcut.kind.as_str(),
                        position
                    ],
                )?;
                report.added += 1;
            }
        }
        tx.commit()?;

        log::debug!(
            "bulk add: {} added, {} updated",
            report.added,
            report.updated
        );
        Ok(report)
    }
}

fn map_shortcut_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Shortcut> {
    let kind_tag: String = row.get(3)?;
    Ok(Shortcut {
        label: row.get(0)?,
        text: row.get(1)?,
        cursor: row.get(2)?,
        // Unknown tags in hand-edited databases degrade to plain text.
        kind: ShortcutKind::parse(&kind_tag).unwrap_or(ShortcutKind::Text),
        position: row.get(4)?,
    })
}
