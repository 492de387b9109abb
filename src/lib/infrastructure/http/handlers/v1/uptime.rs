//! Uptime handler

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::communication::payloads::PayloadValidator,
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// The uptime response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UptimeResponse {
    /// The uptime of the application in seconds
    #[schema(example = 123)]
    pub uptime: i64,
}

/// Get the uptime of the application
#[utoipa::path(
    get,
    operation_id = "uptime",
    tag = "System",
    path = "/api/v1/uptime",
    responses(
        (status = StatusCode::OK, description = "Uptime response", body = UptimeResponse),
    )
)]
pub async fn handler<V: PayloadValidator>(
    State(state): State<AppState<V>>,
) -> Result<(StatusCode, Json<UptimeResponse>), ApiError> {
    let uptime = Utc::now().timestamp() - state.start_time.timestamp();

    Ok((StatusCode::OK, Json(UptimeResponse { uptime })))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use chrono::{Duration, Utc};
    use testresult::TestResult;

    use crate::infrastructure::http::{
        handlers::v1::uptime::UptimeResponse, router, state::tests::test_state,
    };

    #[tokio::test]
    async fn test_uptime_handler() -> TestResult {
        let mut state = test_state(None);
        state.start_time = Utc::now() - Duration::seconds(90);

        let response = TestServer::new(router(state))?.get("/api/v1/uptime").await;

        response.assert_status_ok();

        let json = response.json::<UptimeResponse>();

        assert!(
            (90..=91).contains(&json.uptime),
            "App uptime should be the seconds since the start time"
        );

        Ok(())
    }
}
