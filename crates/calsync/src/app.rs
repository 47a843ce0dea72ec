use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, timeout::TimeoutLayer,
};

use crate::{
    handlers::{
        calendars::{
            create_calendar, delete_calendar, get_calendar, list_calendars, update_calendar,
        },
        health::ping,
    },
    middleware::{common_headers, log_request, panic_handler},
    state::AppState,
};

/// Calendar resource routes, mounted under `/calendars`.
fn calendar_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_calendars).post(create_calendar))
        .route(
            "/{id}",
            get(get_calendar)
                .put(update_calendar)
                .delete(delete_calendar),
        )
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Create the application router with all routes and middleware.
///
/// Layers added later wrap the earlier ones, so the request passes through
/// panic recovery, then logging, then the common headers, then the timeout.
///
/// The collection is reachable with and without the trailing slash.
pub fn create_app(state: AppState) -> Router {
    let headers = common_headers(&state.config.server_name);

    let mut app = Router::new()
        .route("/ping", get(ping))
        .route("/calendars/", get(list_calendars).post(create_calendar))
        .nest("/calendars", calendar_routes())
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout(),
        ));

    for (name, value) in headers.iter().cloned() {
        app = app.layer(SetResponseHeaderLayer::overriding(name, value));
    }

    app.layer(from_fn(log_request))
        .layer(CatchPanicLayer::custom(panic_handler(headers)))
        .with_state(state)
}
