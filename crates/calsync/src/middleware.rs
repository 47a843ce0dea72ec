//! Request middleware applied to every route.
//!
//! Outermost first: panic recovery, request logging, common response headers.
//! The stack itself is assembled in [`crate::app::create_app`].

use std::{
    any::Any,
    net::SocketAddr,
    panic::{resume_unwind, AssertUnwindSafe},
    time::Instant,
};

use axum::{
    extract::{ConnectInfo, Request},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the id generated for each request.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Panic payload re-raised by [`log_request`] once it has logged the failure.
///
/// Carries the request id out to the panic handler, which runs outside the
/// request span.
struct RequestPanic {
    request_id: Uuid,
    payload: Box<dyn Any + Send + 'static>,
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    }
}

fn request_id_header(request_id: Uuid) -> Option<(HeaderName, HeaderValue)> {
    HeaderValue::from_str(&request_id.to_string())
        .ok()
        .map(|value| (HeaderName::from_static(REQUEST_ID_HEADER), value))
}

/// Build the panic handler for `CatchPanicLayer::custom`.
///
/// Responses built here never pass through the header layer, so the common
/// headers are applied directly.
pub fn panic_handler(
    headers: Vec<(HeaderName, HeaderValue)>,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
    move |err| handle_panic(err, &headers)
}

/// Turn a panic into a 500 and ask the client to drop the connection.
pub fn handle_panic(
    err: Box<dyn Any + Send + 'static>,
    headers: &[(HeaderName, HeaderValue)],
) -> Response {
    let request_id = match err.downcast::<RequestPanic>() {
        // Already logged inside the request span.
        Ok(panic) => {
            tracing::debug!(
                request_id = %panic.request_id,
                panic = %panic_message(&*panic.payload),
                "Answering panicked request"
            );
            Some(panic.request_id)
        }
        Err(err) => {
            tracing::error!(panic = %panic_message(&*err), "Handler panicked");
            None
        }
    };

    let status = StatusCode::INTERNAL_SERVER_ERROR;
    let mut response = (
        status,
        [(header::CONNECTION, "close")],
        status.canonical_reason().unwrap_or_default(),
    )
        .into_response();

    let response_headers = response.headers_mut();
    for (name, value) in headers {
        response_headers.insert(name.clone(), value.clone());
    }
    if let Some((name, value)) = request_id.and_then(request_id_header) {
        response_headers.insert(name, value);
    }

    response
}

/// Log every request and run the rest of the stack inside a request span.
///
/// The span carries a fresh request id plus method and URI, so anything the
/// handler logs is tied back to the request. A panic below this point is
/// logged here and then re-raised for the panic handler.
pub async fn log_request(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    async move {
        tracing::info!(remote_addr = %remote_addr, proto = ?version, "Received request");

        let start = Instant::now();
        let outcome = AssertUnwindSafe(next.run(request)).catch_unwind().await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let mut response = match outcome {
            Ok(response) => response,
            Err(payload) => {
                tracing::error!(panic = %panic_message(&*payload), "Handler panicked");
                tracing::info!(
                    status = StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    duration_ms,
                    "Request completed"
                );
                resume_unwind(Box::new(RequestPanic {
                    request_id,
                    payload,
                }));
            }
        };

        if let Some((name, value)) = request_id_header(request_id) {
            response.headers_mut().insert(name, value);
        }

        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}

/// Fixed headers set on every response.
///
/// `Server` comes from configuration and falls back to the crate name when the
/// configured value is not a valid header value.
pub fn common_headers(server_name: &str) -> Vec<(HeaderName, HeaderValue)> {
    let server = HeaderValue::from_str(server_name).unwrap_or_else(|_| {
        tracing::warn!(server_name, "Invalid SERVER_NAME, using default");
        HeaderValue::from_static(env!("CARGO_PKG_NAME"))
    });

    vec![
        (header::SERVER, server),
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
        ),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("origin-when-cross-origin"),
        ),
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("deny")),
        (header::X_XSS_PROTECTION, HeaderValue::from_static("0")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_panic_with_str_payload() {
        let response = handle_panic(Box::new("boom"), &common_headers("calsync"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers().get(header::CONNECTION).unwrap(), "close");
        assert_eq!(response.headers().get(header::SERVER).unwrap(), "calsync");
        assert!(!response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[test]
    fn test_handle_panic_with_unknown_payload() {
        let response = handle_panic(Box::new(42_u32), &[]);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_handle_panic_tags_request_id() {
        let request_id = Uuid::new_v4();
        let err = Box::new(RequestPanic {
            request_id,
            payload: Box::new("boom"),
        });

        let response = handle_panic(err, &common_headers("calsync"));

        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).unwrap(),
            request_id.to_string().as_str()
        );
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
    }

    #[test]
    fn test_panic_handler_applies_captured_headers() {
        let handler = panic_handler(common_headers("my-calendars"));

        let response = handler(Box::new("boom") as Box<dyn Any + Send>);

        assert_eq!(response.headers().get(header::SERVER).unwrap(), "my-calendars");
    }

    #[test]
    fn test_common_headers_uses_server_name() {
        let headers = common_headers("my-calendars");
        let server = headers
            .iter()
            .find(|(name, _)| *name == header::SERVER)
            .map(|(_, value)| value.clone());

        assert_eq!(server, Some(HeaderValue::from_static("my-calendars")));
    }

    #[test]
    fn test_common_headers_rejects_invalid_server_name() {
        let headers = common_headers("bad\nname");
        let server = headers
            .iter()
            .find(|(name, _)| *name == header::SERVER)
            .map(|(_, value)| value.clone());

        assert_eq!(server, Some(HeaderValue::from_static("calsync")));
    }
}
