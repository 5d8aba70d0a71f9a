use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Episode, PatternResult},
    services::classifier,
};

/// Request to classify one season's release cadence
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Episodes in any order; entries without an air date are tolerated
    pub episodes: Vec<Episode>,
}

/// Request to classify several shows in one call
#[derive(Debug, Deserialize)]
pub struct BatchClassifyRequest {
    pub shows: Vec<ShowEpisodes>,
}

#[derive(Debug, Deserialize)]
pub struct ShowEpisodes {
    pub show_id: String,
    pub episodes: Vec<Episode>,
}

/// One show's classification within a batch response
#[derive(Debug, Serialize)]
pub struct ShowPattern {
    pub show_id: String,
    pub result: PatternResult,
}

/// Handler for the single-show classification endpoint
///
/// The classifier is total: any well-formed episode list (including an empty
/// one) yields a result, so this handler has no failure path of its own.
pub async fn classify(
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ClassifyRequest>,
) -> AppResult<Json<PatternResult>> {
    let result = classifier::classify(&request.episodes);

    tracing::info!(
        request_id = %request_id,
        episode_count = request.episodes.len(),
        pattern = ?result.pattern,
        confidence = result.confidence,
        "Classification completed"
    );

    Ok(Json(result))
}

/// Handler for the batch classification endpoint
///
/// Each show is classified independently; results come back in request order.
pub async fn classify_batch(
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<BatchClassifyRequest>,
) -> AppResult<Json<Vec<ShowPattern>>> {
    if request.shows.is_empty() {
        return Err(AppError::InvalidInput(
            "Must provide at least one show".to_string(),
        ));
    }

    tracing::info!(
        request_id = %request_id,
        show_count = request.shows.len(),
        "Processing batch classification"
    );

    let results: Vec<ShowPattern> = request
        .shows
        .into_iter()
        .map(|show| ShowPattern {
            show_id: show.show_id,
            result: classifier::classify(&show.episodes),
        })
        .collect();

    Ok(Json(results))
}
