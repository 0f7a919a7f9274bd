//! Log output for the binaries. Library code only emits `tracing` events.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: `-v` shows info, `-vv` and up shows debug.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "design_patterns=warn",
        1 => "design_patterns=info",
        _ => "design_patterns=debug",
    }
}

/// Install a stderr subscriber. Calling it again is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
