//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

type Layer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Requests replenished per second for each client.
const PER_SECOND: u64 = 2;
/// Requests a client may send in a burst before being throttled.
const BURST_SIZE: u32 = 100;

/// Creates a rate limiter keyed on the socket peer address.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
/// The server must be started with `into_make_service_with_connect_info`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/books", get(list_books_handler))
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> Layer<PeerIpKeyExtractor> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter for deployments behind a reverse proxy.
///
/// Same limits as [`layer`], but the client IP is read from
/// `X-Forwarded-For`, `X-Real-IP` or `Forwarded` before falling back to the
/// peer address. Enable only when the proxy is trusted.
pub fn proxied_layer() -> Layer<SmartIpKeyExtractor> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
