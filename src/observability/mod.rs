//! Structured logging via `tracing`.
//!
//! Every event the controller handles opens a `handle_event` span; the pipeline,
//! paginator refresh and worker log inside it. Logs go to stderr so they never
//! mix with rendered output.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
