use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize diagnostics logging on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `coretime=info`, or
/// `coretime=error` when `quiet` is set.
pub fn init_logging(quiet: bool) {
    let directive = if quiet { "coretime=error" } else { "coretime=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // A subscriber may already be installed (tests); that is fine.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
