use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directive used by `--verbose`. The binary is named `gomi`, so this covers
/// both the scanner and the CLI.
const VERBOSE_DIRECTIVE: &str = "gomi=debug";

/// Install the stderr subscriber. Enabled by `RUST_LOG` (e.g. `RUST_LOG=gomi=trace`)
/// or by `--verbose`, which forces `gomi=debug`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_DIRECTIVE)
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}
