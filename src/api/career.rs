//! Career level API endpoints.

use axum::extract::{rejection::QueryRejection, Query, State};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::career::{parse_point_input, resolve, PeriodWindow, TierStatus, WindowSummary};
use crate::AppState;

/// Query for resolving a raw point entry.
#[derive(Debug, Deserialize)]
pub struct CareerQuery {
    /// Raw entry text; parsed leniently, unparsable input counts as 0
    #[serde(default)]
    pub points: Option<String>,
}

/// Query selecting the evaluated window.
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    #[serde(default)]
    pub start: Option<i64>,
}

/// GET /api/career?points=N - Resolve a point total to its tier status.
pub async fn get_career_status(
    State(state): State<AppState>,
    query: Result<Query<CareerQuery>, QueryRejection>,
) -> ApiResult<TierStatus> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return error(rejection.into(), revision_id),
    };
    let total = query.points.as_deref().map(parse_point_input).unwrap_or(0);
    success(resolve(total), revision_id)
}

/// GET /api/career/window?start=S - Sum the 26-week window starting at S and resolve it.
pub async fn get_window_summary(
    State(state): State<AppState>,
    query: Result<Query<WindowQuery>, QueryRejection>,
) -> ApiResult<WindowSummary> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let start = match query {
        Ok(Query(query)) => query.start.unwrap_or(1),
        Err(rejection) => return error(rejection.into(), revision_id),
    };
    let window = PeriodWindow::new(start);

    match state.repo.list_weeks().await {
        Ok(weeks) => {
            let summary = WindowSummary::build(weeks, window);
            tracing::debug!(
                start = summary.start,
                total = summary.total_points,
                "Window evaluated"
            );
            success(summary, revision_id)
        }
        Err(e) => error(e, revision_id),
    }
}
