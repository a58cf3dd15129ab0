//! Key-value cache access over Redis.
//!
//! One connection per command invocation, built from the configured URL.
//! Absent keys are answers (`None`), not errors.

use redis::{Commands, Connection};

use crate::error::Result;

pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Connect to the server named by a `redis://host:port/db` URL.
    pub fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_connection()?;
        Ok(Self { conn })
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _: () = self.conn.set(key, value)?;
        Ok(())
    }

    pub fn get(&mut self, key: &str) -> Result<Option<String>> {
        Ok(self.conn.get(key)?)
    }

    /// Delete a key; `false` when it did not exist.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        let removed: u32 = self.conn.del(key)?;
        Ok(removed > 0)
    }

    /// Keys matching a glob pattern, sorted for stable output.
    pub fn keys(&mut self, pattern: &str) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.conn.keys(pattern)?;
        keys.sort();
        Ok(keys)
    }

    /// Drop every key in the current database.
    pub fn flush(&mut self) -> Result<()> {
        let _: () = redis::cmd("FLUSHDB").query(&mut self.conn)?;
        Ok(())
    }

    /// Raw server INFO text.
    pub fn info(&mut self) -> Result<String> {
        Ok(redis::cmd("INFO").query(&mut self.conn)?)
    }
}
