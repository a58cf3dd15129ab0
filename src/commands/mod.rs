//! CLI command implementations.
//!
//! One submodule per sub-command group. Each defines the group's subcommand
//! enum (mirrored by a clap enum in the binary) and an `execute_*` handler
//! that builds one adapter, invokes one operation, and renders the outcome.

pub mod cache;
pub mod crypt;
pub mod data;
pub mod db;
pub mod docker;
pub mod env;
pub mod gen;
pub mod hash;
pub mod init;
pub mod net;
pub mod queue;
pub mod secret;
pub mod store;
pub mod time;
pub mod token;

pub use cache::{execute_cache, CacheSubcommand};
pub use crypt::{execute_crypt, CryptSubcommand};
pub use data::{execute_data, DataSubcommand};
pub use db::{execute_db, DbSubcommand};
pub use docker::{execute_docker, DockerSubcommand};
pub use env::{execute_env, EnvSubcommand};
pub use gen::{execute_gen, GenSubcommand};
pub use hash::{execute_hash, HashSubcommand};
pub use init::{execute_init, InitOptions, ShellKind};
pub use net::{execute_net, NetSubcommand};
pub use queue::{execute_queue, QueueSubcommand};
pub use secret::{execute_secret, SecretSubcommand};
pub use store::{execute_store, StoreSubcommand};
pub use time::{execute_time, TimeSubcommand};
pub use token::{execute_token, TokenSubcommand};
