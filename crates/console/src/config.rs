//! Command-line and environment configuration.

use clap::Parser;

use stockroom_observability::{LogConfig, LogFormat};

use crate::session::SessionOptions;

#[derive(Parser, Debug, Clone)]
#[command(name = "stockroom", version, about = "Interactive inventory ledger")]
pub struct Cli {
    /// Default log filter when RUST_LOG is unset (e.g. "info", "stockroom_inventory=debug").
    #[arg(long, env = "STOCKROOM_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log line format written to stderr: json or pretty.
    #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    /// Skip the welcome banner.
    #[arg(long)]
    pub no_greeting: bool,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            greeting: !self.no_greeting,
        }
    }
}
