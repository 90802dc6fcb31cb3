use crate::core::error::{DailylogError, Result};
use rusqlite::Connection;
use std::path::Path;

/// Owns the SQLite connection behind the shortcut store.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens or creates the database at `path` and bootstraps the schema.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    /// Opens an existing database at `path`, validating its structure.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        let table_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type='table'
             AND name IN ('shortcuts', 'store_meta')",
            [],
            |row| row.get(0),
        )?;

        if table_count != 2 {
            return Err(DailylogError::InvalidStore(
                "Not a valid DailyLog shortcut database".to_string(),
            ));
        }

        // Migrate: shortcut databases from before typed shortcuts lack `kind`.
        let column_exists: bool = conn.query_row(
            "SELECT COUNT(*) FROM pragma_table_info('shortcuts') WHERE name='kind'",
            [],
            |row| row.get::<_, i64>(0).map(|count| count > 0),
        )?;

        if !column_exists {
            conn.execute(
                "ALTER TABLE shortcuts ADD COLUMN kind TEXT NOT NULL DEFAULT 'text'",
                [],
            )?;
            conn.execute(
                "UPDATE store_meta SET value = '2' WHERE key = 'schema_version'",
                [],
            )?;
        }

        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}
