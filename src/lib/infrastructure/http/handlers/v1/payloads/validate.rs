//! Validate payload handler

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::communication::payloads::{EmailPayload, PayloadValidator, ValidatedPayload},
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Validate payload request body
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ValidatePayloadBody {
    /// The sender's display name
    #[schema(example = "Johnson")]
    sender_name: String,

    /// The receiver's display name
    #[schema(example = "Janet")]
    receiver_name: String,

    /// The sender's email address
    #[schema(example = "john@example.com")]
    sender_addr: String,

    /// The receiver's email address
    #[schema(example = "jane@example.com")]
    receiver_addr: String,

    /// The HTML body
    #[schema(example = "<p>Hello {name}!</p>")]
    html: String,

    /// Values for the placeholders in the HTML body
    #[schema(example = json!({"name": "Janet"}))]
    replacements: BTreeMap<String, String>,
}

impl From<ValidatePayloadBody> for EmailPayload {
    fn from(body: ValidatePayloadBody) -> Self {
        Self {
            sender_name: body.sender_name,
            receiver_name: body.receiver_name,
            sender_addr: body.sender_addr,
            receiver_addr: body.receiver_addr,
            html: body.html,
            replacements: body.replacements,
        }
    }
}

/// Validate payload response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidatePayloadResponse {
    #[schema(example = "Johnson")]
    sender_name: String,

    #[schema(example = "Janet")]
    receiver_name: String,

    #[schema(example = "john@example.com")]
    sender_addr: String,

    #[schema(example = "jane@example.com")]
    receiver_addr: String,

    #[schema(example = json!(["name"]))]
    placeholders: Vec<String>,
}

impl From<ValidatedPayload> for ValidatePayloadResponse {
    fn from(payload: ValidatedPayload) -> Self {
        let placeholders = payload.placeholders();

        Self {
            sender_name: payload.sender_name.into(),
            receiver_name: payload.receiver_name.into(),
            sender_addr: payload.sender_addr.into(),
            receiver_addr: payload.receiver_addr.into(),
            placeholders,
        }
    }
}

/// Validate an outbound email payload
#[utoipa::path(
    post,
    operation_id = "validate_payload",
    tag = "Payloads",
    path = "/api/v1/payloads/validate",
    request_body = ValidatePayloadBody,
    responses(
        (status = StatusCode::OK, description = "Payload accepted", body = ValidatePayloadResponse),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Payload rejected", body = ErrorResponse, example = json!({"error": "Invalid sender email address: must contain a single '@' character", "kind": "InvalidEmailAddress"})),
    )
)]
pub async fn handler<V: PayloadValidator>(
    State(state): State<AppState<V>>,
    request: Result<Json<ValidatePayloadBody>, JsonRejection>,
) -> Result<(StatusCode, Json<ValidatePayloadResponse>), ApiError> {
    let Json(request) = request?;

    let validated = state.validator.validate(&request.into())?;

    Ok((StatusCode::OK, Json(validated.into())))
}
