//! Week ledger API endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{ClearResult, UpsertWeekRequest, WeekRecord};
use crate::AppState;

/// GET /api/weeks - List all weeks ordered by week number.
pub async fn list_weeks(State(state): State<AppState>) -> ApiResult<Vec<WeekRecord>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_weeks().await {
        Ok(weeks) => success(weeks, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/weeks/:weekNumber - Get a single week; `null` when nothing was recorded.
pub async fn get_week(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Option<WeekRecord>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let week_number = match path
        .map_err(AppError::from)
        .and_then(|Path(raw)| parse_week_number(&raw))
    {
        Ok(n) => n,
        Err(e) => return error(e, revision_id),
    };

    match state.repo.find_week(week_number).await {
        Ok(week) => success(week, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/weeks/:weekNumber - Set the points of a week.
pub async fn upsert_week(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpsertWeekRequest>, JsonRejection>,
) -> ApiResult<WeekRecord> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let week_number = match path
        .map_err(AppError::from)
        .and_then(|Path(raw)| parse_week_number(&raw))
    {
        Ok(n) => n,
        Err(e) => return error(e, revision_id),
    };
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error(rejection.into(), revision_id),
    };

    // Validate required fields
    let Some(points) = request.points else {
        return error(
            AppError::Validation("Points are required".to_string()),
            revision_id,
        );
    };
    if points < 0 {
        return error(
            AppError::Validation("Points must not be negative".to_string()),
            revision_id,
        );
    }
    if let Some(body_week) = request.week_number {
        if body_week != week_number {
            return error(
                AppError::Validation(format!(
                    "Body weekNumber {} does not match path week {}",
                    body_week, week_number
                )),
                revision_id,
            );
        }
    }

    match state.repo.upsert_week(week_number, points).await {
        Ok((week, new_revision)) => success(week, new_revision),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/weeks/clear - Remove every week.
pub async fn clear_weeks(State(state): State<AppState>) -> ApiResult<ClearResult> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.clear_weeks().await {
        Ok((cleared, new_revision)) => success(ClearResult { cleared }, new_revision),
        Err(e) => error(e, revision_id),
    }
}

/// Parse a week number path segment; only positive integers are accepted.
fn parse_week_number(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::Validation(format!(
            "Week number must be a positive integer, got '{}'",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_week_number() {
        assert_eq!(parse_week_number("1").unwrap(), 1);
        assert_eq!(parse_week_number("52").unwrap(), 52);
        assert!(parse_week_number("0").is_err());
        assert!(parse_week_number("-3").is_err());
        assert!(parse_week_number("abc").is_err());
        assert!(parse_week_number("2.5").is_err());
    }
}
