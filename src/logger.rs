pub use tracing::{debug, error, info, instrument, trace, warn};
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::EnvFilter;

pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Span close events only when someone asked for debug output.
    let span_events = if std::env::var("RUST_LOG").unwrap_or_default().contains("debug") {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events)
        .init();
}
