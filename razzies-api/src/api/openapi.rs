//! OpenAPI document for the public endpoints

use axum::Json;
use utoipa::OpenApi;

use super::intervals::{ProducerIntervalDto, ProducersIntervalsResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Razzies API",
        description = "Golden Raspberry Awards worst-movie producer intervals"
    ),
    paths(crate::api::intervals::producers_intervals),
    components(schemas(ProducersIntervalsResponse, ProducerIntervalDto)),
    tags((name = "worst-movies", description = "Worst movie award statistics"))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
