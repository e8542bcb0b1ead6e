pub mod commands;

/// Crates whose logs the binary shows
const LOG_TARGETS: [&str; 3] = ["harp_cli", "harp_core", "harp_replay"];

/// `EnvFilter` directives used when `RUST_LOG` is not set
pub fn log_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}
