use std::net::SocketAddr;

use clap::Parser;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "carerd=info,tower_http=info";

#[derive(Debug, Clone, Parser)]
#[command(name = "carerd")]
#[command(version)]
#[command(about = "Serves synthetic carer schedules for client development", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on. Port 0 picks a free port.
    #[arg(long, default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Seed for reproducible schedules. Request n is generated from `seed + n`.
    #[arg(long)]
    pub seed: Option<u64>,
}
