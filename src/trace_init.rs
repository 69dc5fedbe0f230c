//! Opt-in JSON trace of expansion and session events, for replaying what a
//! typing session did after the fact.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

/// Trace file created inside the directory passed to [`init_tracing`].
pub const TRACE_FILE: &str = "kanatype-trace.jsonl";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACE_FILTER: &str = "kanatype=debug,kana_core=debug,kana_session=debug";

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Append `expand` spans, word loads and key dispatches to
/// `log_dir/kanatype-trace.jsonl`. Later calls are ignored.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, TRACE_FILE));
        // Dropping the guard would stop the writer thread.
        std::mem::forget(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACE_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
}

/// No-op without the `trace` feature.
#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
