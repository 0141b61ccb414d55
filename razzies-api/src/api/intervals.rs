//! Worst-movie producer award intervals
//!
//! GET /api/v1/worst-movies/producers-intervals

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::SqliteWinningMovies;
use crate::domain::{AwardIntervalsResult, AwardIntervalsUseCase, ProducerInterval};
use crate::error::ApiResult;
use crate::AppState;

/// Route path of the intervals endpoint
pub const PRODUCERS_INTERVALS_PATH: &str = "/api/v1/worst-movies/producers-intervals";

/// One producer's gap between two consecutive wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerIntervalDto {
    pub producer: String,
    pub interval: i64,
    pub previous_win: i32,
    pub following_win: i32,
}

impl From<ProducerInterval> for ProducerIntervalDto {
    fn from(interval: ProducerInterval) -> Self {
        Self {
            producer: interval.producer,
            interval: interval.interval,
            previous_win: interval.previous_win,
            following_win: interval.following_win,
        }
    }
}

/// Producers with the shortest (`min`) and longest (`max`) gaps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProducersIntervalsResponse {
    pub min: Vec<ProducerIntervalDto>,
    pub max: Vec<ProducerIntervalDto>,
}

impl From<AwardIntervalsResult> for ProducersIntervalsResponse {
    fn from(result: AwardIntervalsResult) -> Self {
        Self {
            min: result.min.into_iter().map(Into::into).collect(),
            max: result.max.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get award intervals for producers
///
/// Returns the producers with the longest and shortest intervals between
/// two consecutive awards.
#[utoipa::path(
    get,
    path = "/api/v1/worst-movies/producers-intervals",
    tag = "worst-movies",
    responses(
        (
            status = 200,
            description = "Successfully retrieved the list of producer intervals",
            body = ProducersIntervalsResponse
        ),
        (status = 500, description = "Internal server error. Failed to process the request")
    )
)]
pub async fn producers_intervals(
    State(state): State<AppState>,
) -> ApiResult<Json<ProducersIntervalsResponse>> {
    let source = SqliteWinningMovies::new(state.db.clone());
    let result = AwardIntervalsUseCase::new(source).execute().await?;

    Ok(Json(result.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_uses_camel_case() {
        let dto: ProducerIntervalDto = ProducerInterval::new("Matthew Vaughn", 2002, 2015).into();
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["producer"], "Matthew Vaughn");
        assert_eq!(json["interval"], 13);
        assert_eq!(json["previousWin"], 2002);
        assert_eq!(json["followingWin"], 2015);
    }

    #[test]
    fn test_empty_result_serializes_to_empty_lists() {
        let response: ProducersIntervalsResponse = AwardIntervalsResult::default().into();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"min":[],"max":[]}"#);
    }
}
