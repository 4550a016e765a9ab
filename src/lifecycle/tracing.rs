//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber::fmt` subscriber. `RUST_LOG`
//! takes precedence; without it the configured filter applies.
//!
//! ```bash
//! # Default, from config
//! cargo run
//!
//! # Prompts, replies and store payloads
//! RUST_LOG=tyce=debug cargo run
//! ```
//!
//! With `info`, a save that degrades looks like:
//!
//! ```text
//! WARN save{name="Face Serum"}: Store write failed, project kept locally error=Store unavailable: projects collection is not available
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
