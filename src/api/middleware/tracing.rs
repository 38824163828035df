//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span carrying method, URI and HTTP version.
/// Request start is logged at `DEBUG`, completion at `INFO` with status and
/// latency in milliseconds, and 5xx responses at `ERROR`.
///
/// Page cache hits are logged by the page cache itself at `DEBUG`, so a
/// request served from the page cache shows up as a completion without any
/// `cache = "hit"` / `cache = "miss"` event from the listing service.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/properties version=HTTP/1.1}: cache="miss" count=12 Fetched listings from database
/// INFO request{method=GET uri=/properties version=HTTP/1.1}: finished processing request latency=4 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
