// src/lib.rs

//! # Cryptolab Demo
//!
//! Guided walkthrough that drives every cipher in `cryptolab-ciphers` and
//! breaks the weak ones with `cryptolab-analysis`.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐    ┌─────────────────────┐    ┌──────────────┐
//! │  DemoConfig  │ ─► │  runner::run        │ ─► │  DemoReport  │
//! │  (JSON file) │    │  encrypt → attack   │    │  (JSON)      │
//! └──────────────┘    └─────────────────────┘    └──────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod errors;
pub mod config;
pub mod runner;

// Re-export commonly used types
pub use crate::config::DemoConfig;
pub use crate::errors::{DemoError, Result};
pub use crate::runner::{run, DemoReport};

/// Demo version
pub const DEMO_VERSION: &str = env!("CARGO_PKG_VERSION");
