//! Key/value entry operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};

impl Database {
    /// Read the raw text stored under a key.
    pub fn read_entry(&self, key: &str) -> DbResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM store_entries WHERE key = ?",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert or overwrite the text stored under a key.
    ///
    /// A single upsert statement, so the previous value survives any failure.
    pub fn write_entry(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO store_entries (key, value, updated_at)
            VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a key. Returns whether a row existed.
    pub fn remove_entry(&self, key: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM store_entries WHERE key = ?", [key])?;
        Ok(rows_affected > 0)
    }

    /// List all keys, sorted.
    pub fn list_keys(&self) -> DbResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM store_entries ORDER BY key")?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }
}
