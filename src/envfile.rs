//! Environment variable management backed by a dotenv-style file.
//!
//! Reads consult the process environment first and fall back to the file,
//! so values loaded by other means stay visible. Writes update both the
//! process environment and the file, rewriting only the affected line and
//! leaving comments and unrelated lines untouched.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// One dotenv file plus the process environment around it.
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply the file to the process environment without overriding
    /// variables that are already set. Returns the number of entries read.
    pub fn load(&self) -> Result<usize> {
        let entries = self.entries()?;
        for (key, value) in &entries {
            if std::env::var_os(key).is_none() {
                std::env::set_var(key, value);
            }
        }
        Ok(entries.len())
    }

    /// Look up a variable: process environment first, then the file.
    /// Absent variables are `None`, never an error.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Ok(value) = std::env::var(key) {
            return Some(value);
        }
        self.entries()
            .ok()?
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Set a variable in the process environment and persist it.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        std::env::set_var(key, value);
        self.rewrite(key, Some(value))
    }

    /// Remove a variable from the process environment and the file.
    pub fn unset(&self, key: &str) -> Result<()> {
        std::env::remove_var(key);
        self.rewrite(key, None)
    }

    /// Merged view of file entries and the process environment, sorted by
    /// key. Process values win over file values of the same name.
    pub fn vars(&self) -> Result<Vec<(String, String)>> {
        let mut merged: std::collections::BTreeMap<String, String> =
            self.entries()?.into_iter().collect();
        for (key, value) in std::env::vars() {
            merged.insert(key, value);
        }
        Ok(merged.into_iter().collect())
    }

    /// Raw key/value pairs from the file. A missing file reads as empty.
    pub fn entries(&self) -> Result<Vec<(String, String)>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for item in dotenvy::from_path_iter(&self.path)
            .map_err(|e| crate::error::OpsError::InvalidInput(e.to_string()))?
        {
            let (key, value) =
                item.map_err(|e| crate::error::OpsError::InvalidInput(e.to_string()))?;
            entries.push((key, value));
        }
        Ok(entries)
    }

    /// Replace or remove the line defining `key`, preserving everything
    /// else verbatim. `Some(value)` upserts, `None` deletes.
    fn rewrite(&self, key: &str, value: Option<&str>) -> Result<()> {
        let original = if self.path.exists() {
            std::fs::read_to_string(&self.path)?
        } else {
            String::new()
        };

        let mut lines: Vec<String> = Vec::new();
        let mut replaced = false;
        for line in original.lines() {
            if defines_key(line, key) {
                if let Some(value) = value {
                    if !replaced {
                        lines.push(format_entry(key, value));
                        replaced = true;
                    }
                }
                // deletion: drop the line
            } else {
                lines.push(line.to_string());
            }
        }
        if let Some(value) = value {
            if !replaced {
                lines.push(format_entry(key, value));
            }
        }

        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

fn defines_key(line: &str, key: &str) -> bool {
    let trimmed = line.trim_start();
    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    match trimmed.split_once('=') {
        Some((candidate, _)) => candidate.trim() == key,
        None => false,
    }
}

fn format_entry(key: &str, value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '#' || c == '"' || c == '\'');
    if needs_quotes {
        format!("{key}=\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        format!("{key}={value}")
    }
}
