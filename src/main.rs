#![forbid(unsafe_code)]
//! opskit command line interface

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use opskit::commands::{
    execute_cache, execute_crypt, execute_data, execute_db, execute_docker, execute_env,
    execute_gen, execute_hash, execute_init, execute_net, execute_queue, execute_secret,
    execute_store, execute_time, execute_token, CacheSubcommand, CryptSubcommand, DataSubcommand,
    DbSubcommand, DockerSubcommand, EnvSubcommand, GenSubcommand, HashSubcommand, InitOptions,
    NetSubcommand, QueueSubcommand, SecretSubcommand, ShellKind, StoreSubcommand, TimeSubcommand,
    TokenSubcommand,
};
use opskit::{DigestAlgorithm, EnvPair, OffsetReset, OpsConfig, PortMapping, PortRange};

#[derive(Parser)]
#[command(name = "opskit")]
#[command(about = "Swiss-army operations CLI - data wrangling, service plumbing, and network diagnostics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".opskit.config.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert, filter, summarize, merge, and chart tabular data
    Data {
        #[command(subcommand)]
        cmd: DataCommands,
    },

    /// Timezone-aware date and time utilities
    Time {
        #[command(subcommand)]
        cmd: TimeCommands,
    },

    /// SQLite database operations
    Db {
        #[command(subcommand)]
        cmd: DbCommands,
    },

    /// Docker image and container operations
    Docker {
        #[command(subcommand)]
        cmd: DockerCommands,
    },

    /// Encrypt text or files
    Crypt {
        #[command(subcommand)]
        cmd: CryptCommands,
    },

    /// Manage variables in an environment file
    Env {
        #[command(subcommand)]
        cmd: EnvCommands,
    },

    /// Generate and verify file hashes
    Hash {
        #[command(subcommand)]
        cmd: HashCommands,
    },

    /// Issue and verify signed tokens
    Token {
        #[command(subcommand)]
        cmd: TokenCommands,
    },

    /// Produce, consume, and manage message broker topics
    Queue {
        #[command(subcommand)]
        cmd: QueueCommands,
    },

    /// Network diagnostics
    Net {
        #[command(subcommand)]
        cmd: NetCommands,
    },

    /// Key-value cache operations
    Cache {
        #[command(subcommand)]
        cmd: CacheCommands,
    },

    /// Object storage operations
    Store {
        #[command(subcommand)]
        cmd: StoreCommands,
    },

    /// Secrets manager operations
    Secret {
        #[command(subcommand)]
        cmd: SecretCommands,
    },

    /// Generate identifiers
    Gen {
        #[command(subcommand)]
        cmd: GenCommands,
    },

    /// Set up shell auto-completion
    Init {
        /// Shell type for auto-completion setup
        #[arg(long, value_enum)]
        shell: ShellArg,

        /// Skip interactive prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Hashing algorithm
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum HashAlgorithmArg {
    #[default]
    Md5,
    Sha256,
    Sha512,
}

/// Consumer offset reset policy
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum OffsetResetArg {
    #[default]
    Earliest,
    Latest,
}

/// Shell type for completion setup
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
enum DataCommands {
    /// Convert a data file to another format
    Convert {
        /// Path to the input data file
        #[arg(long)]
        input: PathBuf,

        /// Path to the output data file
        #[arg(long)]
        output: PathBuf,

        /// Output format (csv, json, yaml)
        #[arg(long)]
        format: String,
    },

    /// Keep only rows whose column equals a value
    Filter {
        /// Path to the input data file
        #[arg(long)]
        input: PathBuf,

        /// Path to the output data file
        #[arg(long)]
        output: PathBuf,

        /// Column to filter on
        #[arg(long)]
        column: String,

        /// Value to filter by
        #[arg(long)]
        value: String,
    },

    /// Print summary statistics for the numeric columns
    Summarize {
        /// Path to the input data file
        #[arg(long)]
        input: PathBuf,
    },

    /// Merge two data files on a key column
    Merge {
        /// Path to the left data file
        #[arg(long)]
        left: PathBuf,

        /// Path to the right data file
        #[arg(long)]
        right: PathBuf,

        /// Column to merge on
        #[arg(long)]
        on: String,

        /// Path to the output data file
        #[arg(long)]
        output: PathBuf,
    },

    /// Render a chart of two columns to an SVG file
    Chart {
        /// Path to the input data file
        #[arg(long)]
        input: PathBuf,

        /// Column for the x-axis
        #[arg(long)]
        x: String,

        /// Column for the y-axis
        #[arg(long)]
        y: String,

        /// Chart type (bar, line, scatter)
        #[arg(long)]
        chart: String,

        /// Path to the output image file
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
enum TimeCommands {
    /// Show the current time in a zone
    Now {
        /// Time zone to display the current time in
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },

    /// Convert a timestamp between time zones
    Convert {
        /// Time to convert (e.g., "2024-09-10 12:00:00")
        #[arg(long)]
        time: String,

        /// Time zone of the input time
        #[arg(long)]
        from_tz: String,

        /// Time zone to convert the time to
        #[arg(long)]
        to_tz: String,
    },

    /// Add days, weeks, or months to a date
    Add {
        /// Starting date (e.g., "2024-09-10")
        #[arg(long)]
        date: String,

        /// Days to add
        #[arg(long, default_value = "0")]
        days: i64,

        /// Weeks to add
        #[arg(long, default_value = "0")]
        weeks: i64,

        /// Months to add (counted as 30 days each)
        #[arg(long, default_value = "0")]
        months: i64,
    },

    /// Show the span between two dates
    Diff {
        /// Start date (e.g., "2024-09-10")
        #[arg(long)]
        start: String,

        /// End date (e.g., "2024-09-15")
        #[arg(long)]
        end: String,
    },
}

#[derive(Subcommand)]
enum DbCommands {
    /// Run a SQL statement
    Query {
        /// Database connection string
        #[arg(long)]
        db: String,

        /// SQL query to run
        #[arg(long)]
        query: String,
    },

    /// List user tables
    ListTables {
        /// Database connection string
        #[arg(long)]
        db: String,
    },

    /// Apply a SQL migration file
    Migrate {
        /// Database connection string
        #[arg(long)]
        db: String,

        /// Path to the SQL migration file
        #[arg(long)]
        migration: PathBuf,
    },

    /// Back up the database to a file
    Backup {
        /// Database connection string
        #[arg(long)]
        db: String,

        /// Path to save the backup
        #[arg(long)]
        output: PathBuf,
    },

    /// Restore the database from a backup file
    Restore {
        /// Database connection string
        #[arg(long)]
        db: String,

        /// Path to the backup file
        #[arg(long)]
        input: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DockerCommands {
    /// Build an image from a context directory
    Build {
        /// Path to the build context directory
        #[arg(long)]
        path: PathBuf,

        /// Tag for the image
        #[arg(long)]
        tag: String,
    },

    /// Create and start a container
    Run {
        /// Image to run
        #[arg(long)]
        image: String,

        /// Name for the running container
        #[arg(long)]
        name: String,

        /// Port mappings in HOST:CONTAINER form (can specify multiple)
        #[arg(long = "port")]
        ports: Vec<String>,

        /// Environment variables in KEY=VALUE form (can specify multiple)
        #[arg(long = "env")]
        env: Vec<String>,
    },

    /// List containers
    List {
        /// List all containers, including stopped
        #[arg(long)]
        all: bool,
    },

    /// Stop a running container
    Stop {
        /// Name or ID of the container to stop
        #[arg(long)]
        name: String,
    },

    /// Remove a container
    Remove {
        /// Name or ID of the container to remove
        #[arg(long)]
        name: String,
    },

    /// Pull an image from a registry
    Pull {
        /// Image to pull
        #[arg(long)]
        image: String,
    },

    /// Push an image to a registry
    Push {
        /// Image to push
        #[arg(long)]
        image: String,
    },
}

#[derive(Subcommand)]
enum CryptCommands {
    /// Encrypt with a fernet key
    Fernet {
        /// Text to encrypt
        #[arg(long)]
        text: Option<String>,

        /// Path to the input file
        #[arg(long)]
        input: Option<PathBuf>,

        /// Path to the output file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Path to the encryption key
        #[arg(long)]
        key: PathBuf,
    },

    /// Encode as base64
    Base64 {
        /// Text to encode
        #[arg(long)]
        text: Option<String>,

        /// Path to the input file
        #[arg(long)]
        input: Option<PathBuf>,

        /// Path to the output file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Encrypt with an RSA public key
    Rsa {
        /// Text to encrypt
        #[arg(long)]
        text: Option<String>,

        /// Path to the input file
        #[arg(long)]
        input: Option<PathBuf>,

        /// Path to the output file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Path to the RSA public key
        #[arg(long)]
        key: PathBuf,
    },
}

#[derive(Subcommand)]
enum EnvCommands {
    /// Load variables from an environment file into the process
    Load {
        /// Path to the environment file to load
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Set a variable in the environment file
    Set {
        /// Environment variable key
        #[arg(long)]
        key: String,

        /// Environment variable value
        #[arg(long)]
        value: String,
    },

    /// Print a variable from the environment file
    Get {
        /// Environment variable key
        #[arg(long)]
        key: String,
    },

    /// Remove a variable from the environment file
    Unset {
        /// Environment variable key
        #[arg(long)]
        key: String,
    },

    /// List the variables in the environment file
    List,
}

#[derive(Subcommand)]
enum HashCommands {
    /// Compute a file hash
    Generate {
        /// Path to the file to hash
        #[arg(long)]
        file: PathBuf,

        /// Hashing algorithm to use
        #[arg(long, value_enum, default_value = "md5")]
        algorithm: HashAlgorithmArg,
    },

    /// Verify a file against an expected hash
    Verify {
        /// Path to the file to verify
        #[arg(long)]
        file: PathBuf,

        /// Expected hash value
        #[arg(long)]
        hash: String,

        /// Hashing algorithm to use
        #[arg(long, value_enum, default_value = "md5")]
        algorithm: HashAlgorithmArg,
    },
}

#[derive(Subcommand)]
enum TokenCommands {
    /// Issue a signed token from a claims file
    Issue {
        /// Environment (e.g., prod, dev)
        #[arg(long)]
        env: String,

        /// Path to the key file
        #[arg(long)]
        key: PathBuf,

        /// Path to the claims JSON file
        #[arg(long)]
        claims: PathBuf,

        /// Expiration time in seconds
        #[arg(long, default_value = "3600")]
        expires_in: i64,
    },

    /// Verify a token's signature and expiry
    Verify {
        /// The token to verify
        #[arg(long)]
        token: String,

        /// Path to the key file
        #[arg(long)]
        key: PathBuf,
    },
}

#[derive(Subcommand)]
enum QueueCommands {
    /// Produce one message to a topic
    Produce {
        /// Topic to produce the message to
        #[arg(long)]
        topic: String,

        /// Message to produce to the topic
        #[arg(long)]
        message: String,
    },

    /// Consume messages from a topic
    Consume {
        /// Topic to consume messages from
        #[arg(long)]
        topic: String,

        /// Consumer group ID
        #[arg(long)]
        group_id: String,

        /// Offset reset policy
        #[arg(long, value_enum, default_value = "earliest")]
        auto_offset_reset: OffsetResetArg,

        /// Number of polls before returning
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// List topics known to the cluster
    Topics,

    /// Create a topic
    CreateTopic {
        /// Name of the topic to create
        #[arg(long)]
        name: String,

        /// Number of partitions for the topic
        #[arg(long, default_value = "1")]
        partitions: i32,

        /// Replication factor for the topic
        #[arg(long, default_value = "1")]
        replication_factor: i32,
    },

    /// Delete a topic
    DeleteTopic {
        /// Name of the topic to delete
        #[arg(long)]
        name: String,
    },
}

#[derive(Subcommand)]
enum NetCommands {
    /// Ping a host
    Ping {
        /// The host to ping
        #[arg(long)]
        host: String,

        /// Number of ping requests to send
        #[arg(long, default_value = "4")]
        count: u32,
    },

    /// Perform a DNS lookup for a domain
    Dns {
        /// The domain to look up
        #[arg(long)]
        domain: String,
    },

    /// Scan a range of ports on a host
    Scan {
        /// The host to scan
        #[arg(long)]
        host: String,

        /// Port range to scan (e.g., 20-80)
        #[arg(long)]
        ports: String,
    },

    /// Trace the route to a host
    Trace {
        /// The host to trace the route to
        #[arg(long)]
        host: String,

        /// Maximum number of hops
        #[arg(long, default_value = "30")]
        max_hops: u32,
    },

    /// Look up WHOIS registration data for a domain
    Whois {
        /// The domain to query
        #[arg(long)]
        domain: String,
    },

    /// Geolocate an IP address
    Geoip {
        /// The IP address to locate
        #[arg(long)]
        ip: String,
    },

    /// Fetch the HTTP status and headers of a URL
    Http {
        /// The URL to request
        #[arg(long)]
        url: String,
    },

    /// Measure download and upload bandwidth
    Speedtest,

    /// Ping every host in a subnet
    Sweep {
        /// Subnet to sweep in CIDR notation (e.g., 192.168.1.0/24)
        #[arg(long)]
        subnet: String,
    },

    /// Check whether a TCP port accepts connections
    Tcp {
        /// The host to check
        #[arg(long)]
        host: String,

        /// The TCP port to check
        #[arg(long)]
        port: u16,
    },

    /// Show the ARP cache
    Arp,

    /// Show network interfaces
    Interfaces,
}

#[derive(Subcommand)]
enum CacheCommands {
    /// Set a key
    Set {
        /// Key to set
        #[arg(long)]
        key: String,

        /// Value to set for the key
        #[arg(long)]
        value: String,
    },

    /// Print a key's value
    Get {
        /// Key to get
        #[arg(long)]
        key: String,
    },

    /// Delete a key
    Delete {
        /// Key to delete
        #[arg(long)]
        key: String,
    },

    /// List keys matching a pattern
    Keys {
        /// Pattern to match keys
        #[arg(long, default_value = "*")]
        pattern: String,
    },

    /// Drop every key in the current database
    Flush {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print server information
    Info,
}

#[derive(Subcommand)]
enum StoreCommands {
    /// List the objects in a bucket
    List {
        /// Name of the bucket
        #[arg(long)]
        bucket: String,
    },

    /// Upload a file to a bucket
    Upload {
        /// Name of the bucket
        #[arg(long)]
        bucket: String,

        /// Path to the file to upload
        #[arg(long)]
        file: PathBuf,

        /// Object name (defaults to the file name)
        #[arg(long)]
        object: Option<String>,
    },

    /// Download an object from a bucket
    Download {
        /// Name of the bucket
        #[arg(long)]
        bucket: String,

        /// Object name to download
        #[arg(long)]
        object: String,

        /// Path to save the downloaded file
        #[arg(long)]
        output: PathBuf,
    },

    /// Delete an object from a bucket
    Delete {
        /// Name of the bucket
        #[arg(long)]
        bucket: String,

        /// Object name to delete
        #[arg(long)]
        object: String,
    },
}

#[derive(Subcommand)]
enum SecretCommands {
    /// Store a new secret
    Store {
        /// Name of the secret
        #[arg(long)]
        name: String,

        /// Value of the secret
        #[arg(long)]
        value: String,

        /// AWS region
        #[arg(long)]
        region: Option<String>,
    },

    /// Print a secret's value
    Get {
        /// Name of the secret
        #[arg(long)]
        name: String,

        /// AWS region
        #[arg(long)]
        region: Option<String>,
    },

    /// List secret names
    List {
        /// AWS region
        #[arg(long)]
        region: Option<String>,
    },

    /// Delete a secret
    Delete {
        /// Name of the secret to delete
        #[arg(long)]
        name: String,

        /// AWS region
        #[arg(long)]
        region: Option<String>,
    },
}

#[derive(Subcommand)]
enum GenCommands {
    /// Generate a time-based UUID (version 1)
    Uuid1,

    /// Generate a random UUID (version 4)
    Uuid4,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load config
    let config = if cli.config.exists() {
        OpsConfig::load(&cli.config)?
    } else {
        OpsConfig::default()
    };

    match cli.command {
        Commands::Data { cmd } => {
            let subcommand = match cmd {
                DataCommands::Convert {
                    input,
                    output,
                    format,
                } => DataSubcommand::Convert {
                    input,
                    output,
                    format,
                },
                DataCommands::Filter {
                    input,
                    output,
                    column,
                    value,
                } => DataSubcommand::Filter {
                    input,
                    output,
                    column,
                    value,
                },
                DataCommands::Summarize { input } => DataSubcommand::Summarize { input },
                DataCommands::Merge {
                    left,
                    right,
                    on,
                    output,
                } => DataSubcommand::Merge {
                    left,
                    right,
                    on,
                    output,
                },
                DataCommands::Chart {
                    input,
                    x,
                    y,
                    chart,
                    output,
                } => DataSubcommand::Chart {
                    input,
                    x,
                    y,
                    chart,
                    output,
                },
            };
            execute_data(subcommand)?;
        }

        Commands::Time { cmd } => {
            let subcommand = match cmd {
                TimeCommands::Now { timezone } => TimeSubcommand::Now { timezone },
                TimeCommands::Convert {
                    time,
                    from_tz,
                    to_tz,
                } => TimeSubcommand::Convert {
                    time,
                    from_tz,
                    to_tz,
                },
                TimeCommands::Add {
                    date,
                    days,
                    weeks,
                    months,
                } => TimeSubcommand::Add {
                    date,
                    days,
                    weeks,
                    months,
                },
                TimeCommands::Diff { start, end } => TimeSubcommand::Diff { start, end },
            };
            execute_time(subcommand)?;
        }

        Commands::Db { cmd } => {
            let subcommand = match cmd {
                DbCommands::Query { db, query } => DbSubcommand::Query { db, query },
                DbCommands::ListTables { db } => DbSubcommand::ListTables { db },
                DbCommands::Migrate { db, migration } => DbSubcommand::Migrate { db, migration },
                DbCommands::Backup { db, output } => DbSubcommand::Backup { db, output },
                DbCommands::Restore { db, input, yes } => DbSubcommand::Restore { db, input, yes },
            };
            execute_db(subcommand)?;
        }

        Commands::Docker { cmd } => {
            let subcommand = match cmd {
                DockerCommands::Build { path, tag } => DockerSubcommand::Build { path, tag },
                DockerCommands::Run {
                    image,
                    name,
                    ports,
                    env,
                } => {
                    let ports = ports
                        .iter()
                        .map(|p| p.parse::<PortMapping>())
                        .collect::<Result<Vec<_>, _>>()?;
                    let env = env
                        .iter()
                        .map(|e| e.parse::<EnvPair>())
                        .collect::<Result<Vec<_>, _>>()?;
                    DockerSubcommand::Run {
                        image,
                        name,
                        ports,
                        env,
                    }
                }
                DockerCommands::List { all } => DockerSubcommand::List { all },
                DockerCommands::Stop { name } => DockerSubcommand::Stop { name },
                DockerCommands::Remove { name } => DockerSubcommand::Remove { name },
                DockerCommands::Pull { image } => DockerSubcommand::Pull { image },
                DockerCommands::Push { image } => DockerSubcommand::Push { image },
            };
            execute_docker(subcommand).await?;
        }

        Commands::Crypt { cmd } => {
            let subcommand = match cmd {
                CryptCommands::Fernet {
                    text,
                    input,
                    output,
                    key,
                } => CryptSubcommand::Fernet {
                    text,
                    input,
                    output,
                    key,
                },
                CryptCommands::Base64 {
                    text,
                    input,
                    output,
                } => CryptSubcommand::Base64 {
                    text,
                    input,
                    output,
                },
                CryptCommands::Rsa {
                    text,
                    input,
                    output,
                    key,
                } => CryptSubcommand::Rsa {
                    text,
                    input,
                    output,
                    key,
                },
            };
            execute_crypt(subcommand)?;
        }

        Commands::Env { cmd } => {
            let subcommand = match cmd {
                EnvCommands::Load { file } => EnvSubcommand::Load { file },
                EnvCommands::Set { key, value } => EnvSubcommand::Set { key, value },
                EnvCommands::Get { key } => EnvSubcommand::Get { key },
                EnvCommands::Unset { key } => EnvSubcommand::Unset { key },
                EnvCommands::List => EnvSubcommand::List,
            };
            execute_env(&config, subcommand)?;
        }

        Commands::Hash { cmd } => {
            let subcommand = match cmd {
                HashCommands::Generate { file, algorithm } => HashSubcommand::Generate {
                    file,
                    algorithm: match algorithm {
                        HashAlgorithmArg::Md5 => DigestAlgorithm::Md5,
                        HashAlgorithmArg::Sha256 => DigestAlgorithm::Sha256,
                        HashAlgorithmArg::Sha512 => DigestAlgorithm::Sha512,
                    },
                },
                HashCommands::Verify {
                    file,
                    hash,
                    algorithm,
                } => HashSubcommand::Verify {
                    file,
                    hash,
                    algorithm: match algorithm {
                        HashAlgorithmArg::Md5 => DigestAlgorithm::Md5,
                        HashAlgorithmArg::Sha256 => DigestAlgorithm::Sha256,
                        HashAlgorithmArg::Sha512 => DigestAlgorithm::Sha512,
                    },
                },
            };
            execute_hash(subcommand)?;
        }

        Commands::Token { cmd } => {
            let subcommand = match cmd {
                TokenCommands::Issue {
                    env,
                    key,
                    claims,
                    expires_in,
                } => TokenSubcommand::Issue {
                    env,
                    key,
                    claims,
                    expires_in,
                },
                TokenCommands::Verify { token, key } => TokenSubcommand::Verify { token, key },
            };
            execute_token(subcommand)?;
        }

        Commands::Queue { cmd } => {
            let subcommand = match cmd {
                QueueCommands::Produce { topic, message } => {
                    QueueSubcommand::Produce { topic, message }
                }
                QueueCommands::Consume {
                    topic,
                    group_id,
                    auto_offset_reset,
                    max,
                } => QueueSubcommand::Consume {
                    topic,
                    group_id,
                    auto_offset_reset: match auto_offset_reset {
                        OffsetResetArg::Earliest => OffsetReset::Earliest,
                        OffsetResetArg::Latest => OffsetReset::Latest,
                    },
                    max,
                },
                QueueCommands::Topics => QueueSubcommand::Topics,
                QueueCommands::CreateTopic {
                    name,
                    partitions,
                    replication_factor,
                } => QueueSubcommand::CreateTopic {
                    name,
                    partitions,
                    replication_factor,
                },
                QueueCommands::DeleteTopic { name } => QueueSubcommand::DeleteTopic { name },
            };
            execute_queue(&config, subcommand).await?;
        }

        Commands::Net { cmd } => {
            let subcommand = match cmd {
                NetCommands::Ping { host, count } => NetSubcommand::Ping { host, count },
                NetCommands::Dns { domain } => NetSubcommand::Dns { domain },
                NetCommands::Scan { host, ports } => NetSubcommand::Scan {
                    host,
                    ports: ports.parse::<PortRange>()?,
                },
                NetCommands::Trace { host, max_hops } => NetSubcommand::Trace { host, max_hops },
                NetCommands::Whois { domain } => NetSubcommand::Whois { domain },
                NetCommands::Geoip { ip } => NetSubcommand::Geoip { ip },
                NetCommands::Http { url } => NetSubcommand::Http { url },
                NetCommands::Speedtest => NetSubcommand::Speedtest,
                NetCommands::Sweep { subnet } => NetSubcommand::Sweep { subnet },
                NetCommands::Tcp { host, port } => NetSubcommand::Tcp { host, port },
                NetCommands::Arp => NetSubcommand::Arp,
                NetCommands::Interfaces => NetSubcommand::Interfaces,
            };
            execute_net(&config, subcommand)?;
        }

        Commands::Cache { cmd } => {
            let subcommand = match cmd {
                CacheCommands::Set { key, value } => CacheSubcommand::Set { key, value },
                CacheCommands::Get { key } => CacheSubcommand::Get { key },
                CacheCommands::Delete { key } => CacheSubcommand::Delete { key },
                CacheCommands::Keys { pattern } => CacheSubcommand::Keys { pattern },
                CacheCommands::Flush { yes } => CacheSubcommand::Flush { yes },
                CacheCommands::Info => CacheSubcommand::Info,
            };
            execute_cache(&config, subcommand)?;
        }

        Commands::Store { cmd } => {
            let subcommand = match cmd {
                StoreCommands::List { bucket } => StoreSubcommand::List { bucket },
                StoreCommands::Upload {
                    bucket,
                    file,
                    object,
                } => StoreSubcommand::Upload {
                    bucket,
                    file,
                    object,
                },
                StoreCommands::Download {
                    bucket,
                    object,
                    output,
                } => StoreSubcommand::Download {
                    bucket,
                    object,
                    output,
                },
                StoreCommands::Delete { bucket, object } => {
                    StoreSubcommand::Delete { bucket, object }
                }
            };
            execute_store(&config, subcommand).await?;
        }

        Commands::Secret { cmd } => {
            let subcommand = match cmd {
                SecretCommands::Store {
                    name,
                    value,
                    region,
                } => SecretSubcommand::Store {
                    name,
                    value,
                    region,
                },
                SecretCommands::Get { name, region } => SecretSubcommand::Get { name, region },
                SecretCommands::List { region } => SecretSubcommand::List { region },
                SecretCommands::Delete { name, region } => {
                    SecretSubcommand::Delete { name, region }
                }
            };
            execute_secret(&config, subcommand).await?;
        }

        Commands::Gen { cmd } => {
            let subcommand = match cmd {
                GenCommands::Uuid1 => GenSubcommand::Uuid1,
                GenCommands::Uuid4 => GenSubcommand::Uuid4,
            };
            execute_gen(subcommand)?;
        }

        Commands::Init { shell, yes } => {
            let (kind, generator) = match shell {
                ShellArg::Bash => (ShellKind::Bash, clap_complete::Shell::Bash),
                ShellArg::Zsh => (ShellKind::Zsh, clap_complete::Shell::Zsh),
                ShellArg::Fish => (ShellKind::Fish, clap_complete::Shell::Fish),
            };
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            let mut buffer = Vec::new();
            clap_complete::generate(generator, &mut command, name, &mut buffer);
            let script = String::from_utf8(buffer)?;
            execute_init(InitOptions { shell: kind, yes }, &script)?;
        }
    }

    Ok(())
}
