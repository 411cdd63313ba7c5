//! Chat room HTTP server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin batepapo-server -- --port 5000
//! ```

use batepapo_server::ServerConfig;
use batepapo_shared::logger::setup_logger;
use clap::Parser;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = batepapo_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
