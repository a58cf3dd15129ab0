//! Relational database access over SQLite.
//!
//! Connection strings are plain file paths, optionally prefixed with
//! `sqlite://`; `:memory:` opens an in-memory database. Queries run as a
//! single statement; migrations run as a batch so multi-statement files
//! apply atomically.

use std::path::Path;
use std::time::Duration;

use rusqlite::backup::Backup;
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde_json::Value;

use crate::error::{OpsError, Result};

/// Outcome of one SQL statement.
pub enum QueryOutcome {
    /// Statement produced rows (SELECT, PRAGMA, RETURNING, ...).
    Rows {
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    },
    /// Statement completed without rows; `changes` rows were affected.
    Done { changes: usize },
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open a database from a connection string.
    pub fn connect(connection_string: &str) -> Result<Self> {
        let target = connection_string
            .strip_prefix("sqlite://")
            .unwrap_or(connection_string);
        let conn = if target == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(target)?
        };
        Ok(Self { conn })
    }

    /// Run one SQL statement.
    pub fn run_query(&self, sql: &str) -> Result<QueryOutcome> {
        let mut stmt = self.conn.prepare(sql)?;
        if stmt.column_count() == 0 {
            let changes = stmt.execute([])?;
            return Ok(QueryOutcome::Done { changes });
        }

        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let mut out = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut record = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                record.push(json_value(row.get_ref(idx)?));
            }
            out.push(record);
        }
        Ok(QueryOutcome::Rows { columns, rows: out })
    }

    /// Names of user tables, sorted.
    pub fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Apply a SQL migration file as one batch.
    pub fn run_migration(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(OpsError::InvalidInput(format!(
                "migration file {} not found",
                path.display()
            )));
        }
        let sql = std::fs::read_to_string(path)?;
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    /// Copy the live database into a backup file using the online
    /// backup API, so it works while readers hold the database open.
    pub fn backup_to(&self, dest: &Path) -> Result<()> {
        let mut target = Connection::open(dest)?;
        let backup = Backup::new(&self.conn, &mut target)?;
        backup.run_to_completion(64, Duration::from_millis(50), None)?;
        Ok(())
    }

    /// Replace this database's contents from a backup file.
    pub fn restore_from(&mut self, source: &Path) -> Result<()> {
        if !source.exists() {
            return Err(OpsError::InvalidInput(format!(
                "backup file {} not found",
                source.display()
            )));
        }
        let source_conn = Connection::open(source)?;
        let backup = Backup::new(&source_conn, &mut self.conn)?;
        backup.run_to_completion(64, Duration::from_millis(50), None)?;
        Ok(())
    }
}

fn json_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(text) => Value::String(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(blob) => Value::String(crate::crypto::encode_base64(blob)),
    }
}
