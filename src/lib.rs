#![forbid(unsafe_code)]

//! # opskit
//!
//! A swiss-army operations CLI: data wrangling, service plumbing, and
//! network diagnostics in one binary.
//!
//! The library is organized as small domain modules (tabular data,
//! calendar math, digests, tokens, service adapters) with the
//! user-facing sub-commands layered on top in [`commands`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use opskit::tabular::{DataFormat, Frame};
//!
//! fn main() -> anyhow::Result<()> {
//!     let frame = Frame::from_path(Path::new("metrics.csv"))?;
//!     frame.write_to(Path::new("metrics.json"), DataFormat::Json)?;
//!     Ok(())
//! }
//! ```

pub mod broker;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod container;
pub mod crypto;
pub mod database;
pub mod digest;
pub mod envfile;
pub mod error;
pub mod ident;
pub mod kv;
pub mod net;
pub mod objstore;
pub mod secrets;
pub mod tabular;
pub mod token;

// Re-exports
pub use broker::{Broker, OffsetReset};
pub use calendar::{DateSpan, Shift};
pub use config::OpsConfig;
pub use container::{ContainerEngine, EnvPair, PortMapping};
pub use database::Database;
pub use digest::DigestAlgorithm;
pub use envfile::EnvFile;
pub use error::{OpsError, Result};
pub use kv::KvStore;
pub use net::PortRange;
pub use objstore::ObjStore;
pub use secrets::SecretStore;
pub use tabular::{ChartKind, DataFormat, Frame};
pub use token::TokenSigner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
