//! Health check endpoint.

/// GET /ping - Liveness check.
///
/// Returns a fixed body without touching storage.
pub async fn ping() -> &'static str {
    "OK"
}
