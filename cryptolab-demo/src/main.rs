// src/main.rs

//! Cryptolab demo binary entry point.
//!
//! Usage: `cryptolab-demo [config.json]`

use anyhow::Context;
use cryptolab_demo::{run, DemoConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load configuration, falling back to the built-in walkthrough
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => DemoConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DemoConfig::default(),
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("🔐 Cryptolab Demo");
    tracing::info!("Version: {}", cryptolab_demo::DEMO_VERSION);

    let report = run(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
