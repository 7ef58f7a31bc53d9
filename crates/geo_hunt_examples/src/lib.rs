#![forbid(unsafe_code)]

use tracing_subscriber::filter::LevelFilter;

/// Installs a stdout tracing subscriber for the example binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_target(false)
        .init();
}
