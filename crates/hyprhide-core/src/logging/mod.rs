use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
/// `RUST_LOG` directives are honoured on top of either level.
pub fn init_logging(quiet: bool) {
    let directives: &[&str] = if quiet {
        &["hyprhide=error", "hyprhide_core=error"]
    } else {
        &["hyprhide=info", "hyprhide_core=info"]
    };

    let mut filter = EnvFilter::from_default_env();
    for directive in directives {
        match directive.parse() {
            Ok(parsed) => filter = filter.add_directive(parsed),
            Err(e) => eprintln!("Warning: ignoring log directive '{}': {}", directive, e),
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
