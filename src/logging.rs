//! Logging setup using `tracing`.
//!
//! Filtering follows `RUST_LOG`; without it, `nsnotify` logs at `info`
//! and everything else at `warn`. Output goes
//! to stderr so stdout stays free for `--print`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,nsnotify=info"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry().with(filter).with(layer).init();
}
