/// Installs the stderr logger. `RUST_LOG` overrides the level picked here.
pub fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    builder.filter(None, level);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    // A second init (e.g. from tests) is harmless.
    let _ = builder.try_init();
}
