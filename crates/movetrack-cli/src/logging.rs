use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::types::LogLevel;

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `--log-level`.
///
/// stdout is reserved for command output (JSON consumers read it), so logs never go there.
pub fn init_tracing(level: LogLevel) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.to_string()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. when `run` is called twice in-process) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(env_filter)
        .try_init();
}
