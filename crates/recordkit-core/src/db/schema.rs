//! SQLite schema definition.

/// Complete database schema for recordkit.
///
/// Every store key owns exactly one row. The value column holds the encoded
/// collection (or scalar) as JSON text.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Store Entries
-- ============================================================================

CREATE TABLE IF NOT EXISTS store_entries (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
"#;
