//! Command line and environment configuration.

use std::time::Duration;

use clap::Parser;

use crate::error::ServerError;

const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

#[derive(Parser, Debug, Clone)]
#[command(name = "batepapo-server", about = "Chat room HTTP server")]
pub struct ServerConfig {
    #[arg(long, env = "BATEPAPO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Seconds without a heartbeat after which a participant is removed
    #[arg(long, env = "BATEPAPO_INACTIVITY_TIMEOUT_SECS", default_value_t = 10)]
    pub inactivity_timeout_secs: u64,

    /// Seconds between two inactivity sweeps
    #[arg(long, env = "BATEPAPO_SWEEP_INTERVAL_SECS", default_value_t = 15)]
    pub sweep_interval_secs: u64,

    /// Offset applied to the `HH:MM:SS` message times
    #[arg(
        long,
        env = "BATEPAPO_UTC_OFFSET_MINUTES",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub utc_offset_minutes: i32,

    /// Concurrent store connections
    #[arg(long, env = "BATEPAPO_MAX_CONNECTIONS", default_value_t = 16)]
    pub max_connections: usize,

    #[arg(long, env = "BATEPAPO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.sweep_interval_secs == 0 {
            return Err(ServerError::InvalidConfig(
                "sweep interval must be at least one second".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(ServerError::InvalidConfig(
                "max connections must be positive".to_string(),
            ));
        }
        if self.utc_offset_minutes.abs() >= MAX_UTC_OFFSET_MINUTES {
            return Err(ServerError::InvalidConfig(format!(
                "utc offset must be less than {MAX_UTC_OFFSET_MINUTES} minutes either way (got {})",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}
