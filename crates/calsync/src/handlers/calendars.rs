//! Calendar CRUD handlers.
//!
//! Each handler decodes and validates its input, calls the repository, and
//! serializes the stored calendar. Status mapping lives in [`ApiError`].

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

use calsync_core::calendar::{CalendarId, CreateCalendarRequest, UpdateCalendarRequest};

use crate::{handlers::ApiError, state::AppState};

/// Serialize `value` as the JSON body of a response with the given status.
fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Decode a JSON request body. The `Content-Type` header is not consulted.
fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}

fn calendar_id(path: Result<Path<CalendarId>, PathRejection>) -> Result<CalendarId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::InvalidId(e.body_text()))
}

/// List all calendars (GET /calendars/).
pub async fn list_calendars(State(state): State<AppState>) -> Result<Response, ApiError> {
    let calendars = state.calendar_repo.list_calendars().await?;

    tracing::debug!(count = calendars.len(), "Listed calendars");

    json_response(StatusCode::OK, &calendars)
}

/// Create a new calendar (POST /calendars/).
pub async fn create_calendar(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payload: CreateCalendarRequest = decode_json(&body)?;
    let (name, owner_id) = payload.validate()?;

    let calendar = state.calendar_repo.create_calendar(name, owner_id).await?;

    tracing::info!(
        calendar_id = calendar.id,
        owner_id = calendar.owner_id,
        name = %calendar.name,
        "Created new calendar"
    );

    json_response(StatusCode::OK, &calendar)
}

/// Get a single calendar by ID (GET /calendars/{id}).
pub async fn get_calendar(
    State(state): State<AppState>,
    path: Result<Path<CalendarId>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = calendar_id(path)?;

    let calendar = state.calendar_repo.get_calendar(id).await?;

    json_response(StatusCode::OK, &calendar)
}

/// Rename a calendar by ID (PUT /calendars/{id}).
pub async fn update_calendar(
    State(state): State<AppState>,
    path: Result<Path<CalendarId>, PathRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = calendar_id(path)?;
    let payload: UpdateCalendarRequest = decode_json(&body)?;
    let name = payload.validate()?;

    let calendar = state.calendar_repo.update_calendar(id, name).await?;

    tracing::info!(calendar_id = id, name = %calendar.name, "Updated calendar");

    json_response(StatusCode::OK, &calendar)
}

/// Delete a calendar by ID (DELETE /calendars/{id}).
pub async fn delete_calendar(
    State(state): State<AppState>,
    path: Result<Path<CalendarId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = calendar_id(path)?;

    state.calendar_repo.delete_calendar(id).await?;

    tracing::info!(calendar_id = id, "Deleted calendar");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_json_response_sets_content_type() {
        let response = json_response(StatusCode::OK, &vec![1, 2, 3]).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_decode_json_reads_body() {
        let body = Bytes::from_static(br#"{"name": "Work", "owner_id": 7}"#);

        let request: CreateCalendarRequest = decode_json(&body).unwrap();

        assert_eq!(request.validate().unwrap(), ("Work".to_string(), 7));
    }

    #[test]
    fn test_decode_json_rejects_malformed_body() {
        let error = decode_json::<UpdateCalendarRequest>(&Bytes::from_static(b"not json"))
            .unwrap_err();

        assert!(matches!(error, ApiError::InvalidPayload(_)));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_json_response_reports_encoding_failure() {
        // JSON object keys must be strings.
        let mut unencodable = BTreeMap::new();
        unencodable.insert((1, 2), "pair key");

        let error = json_response(StatusCode::OK, &unencodable).unwrap_err();

        assert!(matches!(error, ApiError::Encoding(_)));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
