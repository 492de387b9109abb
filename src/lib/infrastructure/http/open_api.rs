//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::v1::*};

/// OpenAPI documentation for the API
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Payload Validator"),
    paths(payloads::validate::handler, uptime::handler),
    components(schemas(
        payloads::validate::ValidatePayloadBody,
        payloads::validate::ValidatePayloadResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
