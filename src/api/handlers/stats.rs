//! Statistics handler.

use axum::Json;
use axum::extract::State;

use crate::api::dto::responses::{ApiResponse, StatsResponse};
use crate::api::dto::transformers::statistics_to_response;
use crate::api::middleware::{ApiFailure, CurrentUser};
use crate::application::StatsService;
use crate::infrastructure::AppDependencies;

/// GET /stats - Aggregate task and note counters, computed fresh.
pub async fn get_stats(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<StatsResponse>>, ApiFailure> {
    let statistics = StatsService::new(dependencies.tasks().clone(), dependencies.notes().clone())
        .statistics(&user)
        .await?;

    Ok(Json(ApiResponse::success(statistics_to_response(
        &statistics,
    ))))
}
