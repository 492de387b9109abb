//! Version 1 of the API

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::communication::payloads::PayloadValidator,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod payloads;
pub mod stoplight;
pub mod uptime;

/// Create the router for version 1 of the API
pub fn router<V: PayloadValidator>() -> Router<AppState<V>> {
    Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
        .route("/payloads/validate", post(payloads::validate::handler))
}
