//! Bellboard display binary.
//!
//! Builds the compiled-in school configuration, wires the system clock to a
//! terminal display sink, and runs the 1 Hz tick loop.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin bellboard-display
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bellboard::config::SchoolConfig;
use bellboard::display::TerminalDisplay;
use bellboard::runtime::{self, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting bellboard display");

    let config = SchoolConfig::standard().context("built-in school configuration is invalid")?;
    info!(
        terms = config.terms.terms().len(),
        weekday_slots = config.weekday_table.entries().len(),
        friday_slots = config.friday_table.entries().len(),
        "Configuration loaded"
    );

    let clock = SystemClock;
    let mut sink = TerminalDisplay::new();
    runtime::run(&config, &clock, &mut sink).await;

    Ok(())
}
