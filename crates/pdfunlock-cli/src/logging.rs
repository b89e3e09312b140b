use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the `-v`/`-q` flags to the default log level.
///
/// With no flags nothing is logged, so per-file messages on stdout stay the
/// only output. `RUST_LOG` still overrides whatever this returns.
pub fn default_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Logs go to stderr.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, quiet).into())
        .from_env_lossy();

    // A subscriber may already be installed when the binary is driven from
    // tests; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
