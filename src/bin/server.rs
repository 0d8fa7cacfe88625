//! Real-time buzzer game server.
//!
//! Participants join a room over WebSocket, the first joiner becomes the
//! admin, and buzzes are ordered by server arrival time.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use buzzroom::{
    common::{logger::setup_logger, time::SystemClock},
    server::{AppState, run_server},
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Real-time buzzer game server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    let state = Arc::new(AppState::new(Box::new(SystemClock)));

    if let Err(e) = run_server(state, args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
