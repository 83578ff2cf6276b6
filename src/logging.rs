use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the console subscriber for the CLI. Events go to stderr so they
/// never interleave with shell output on stdout. `RUST_LOG` takes precedence.
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "rate_tracker=debug"
    } else {
        "rate_tracker=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
