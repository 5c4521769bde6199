//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

/// Project cockpit backend server.
#[derive(Debug, Parser)]
#[command(name = "cockpit-server", version, about)]
pub struct Cli {
    /// Host to bind to.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Upstream tracking-service base URL.
    #[arg(
        long,
        env = "OP_BASE_URL",
        default_value = "https://example.openprojectcloud.de"
    )]
    pub base_url: String,

    /// Upstream API token. Without one the server runs against the local
    /// store.
    #[arg(long, env = "OP_API_TOKEN", default_value = "", hide_env_values = true)]
    pub api_token: String,

    /// Basic-auth username for the upstream API.
    #[arg(long, env = "OP_USERNAME", default_value = "apikey")]
    pub username: String,

    /// Force the local mock store even when a token is configured.
    #[arg(long, env = "OP_USE_MOCK")]
    pub use_mock: bool,

    /// Comma-separated override of the target type names
    /// (milestone,deliverable,external goal,internal goal,offer).
    #[arg(long, env = "OP_TARGET_TYPES")]
    pub target_types: Option<String>,

    /// Path to the local store document.
    #[arg(long, env = "COCKPIT_DATA_FILE", default_value = "data/projects.json")]
    pub data_file: PathBuf,

    /// Log level when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Whether to run against the local store: forced by the flag, or
    /// implied by a missing upstream token.
    pub fn mock_mode(&self) -> bool {
        self.use_mock || self.api_token.is_empty()
    }
}
