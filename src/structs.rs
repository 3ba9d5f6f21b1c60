use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the config file with default values if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// UDP listen address, overrides udp_server.bind_address (e.g. ":9000").
    #[arg(long)]
    pub listen: Option<String>,

    /// HTTP metrics address, overrides http_server.bind_address (e.g. ":9090").
    #[arg(long)]
    pub http: Option<String>,

    /// Number of workers, overrides engine.workers (zero or negative means the default).
    #[arg(long, allow_negative_numbers = true)]
    pub workers: Option<i64>
}
