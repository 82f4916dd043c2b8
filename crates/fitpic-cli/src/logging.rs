use tracing_subscriber::EnvFilter;

use crate::args::LogLevel;

const CRATES: [&str; 4] = ["fitpic", "fitpic_runtime", "fitpic_store", "fitpic_engine"];

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level` when set.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = CRATES
            .iter()
            .map(|name| format!("{}={}", name, level))
            .collect();
        EnvFilter::new(directives.join(","))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
