//! Request handlers for the sentiment analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::classify::{classify, CategoryResult, ClassificationMode};
use crate::resolver::{self, FetchError};
use crate::sentiment::SentimentIntensityAnalyzer;

/// Shared per-process state: one HTTP client, one scorer, one default mode.
/// Requests hold no state of their own, so handlers run concurrently
/// without locking.
pub struct AppState {
    pub client: reqwest::Client,
    pub analyzer: SentimentIntensityAnalyzer,
    pub default_mode: ClassificationMode,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Literal text to score, or a web page URL when prefixed with `http`.
    pub input_text: String,
    /// Optional override of the deployment-wide classification mode.
    pub mode: Option<ClassificationMode>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub success: bool,
    /// Category labels for the resolved text; absent when resolution failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryResult>,
    /// Fetch diagnostic when a URL could not be resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Resolve the input, score it, and classify the scores.
///
/// A failed URL fetch is reported in the response body instead of being
/// scored as if it were page content; the request itself still succeeds.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis result or fetch diagnostic", body = AnalyzeResponse)
    ),
    tag = "sentiment"
)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let mode = req.mode.unwrap_or(state.default_mode);

    let text = match resolver::resolve(&state.client, &req.input_text).await {
        Ok(text) => text,
        Err(err) => {
            match &err {
                FetchError::Status(status) => {
                    tracing::warn!(%status, "resolution failed: non-200 response")
                }
                FetchError::Transport(source) => {
                    tracing::warn!(error = %source, "resolution failed: transport fault")
                }
            }
            return Json(AnalyzeResponse {
                success: false,
                categories: None,
                error: Some(err.to_string()),
            });
        }
    };

    let scores = state.analyzer.polarity_scores(&text);
    let categories = classify(scores, mode);
    tracing::info!(
        mode = ?mode,
        compound = scores.compound,
        sentiment = categories.sentiment().as_str(),
        chars = text.len(),
        "analyzed input"
    );

    Json(AnalyzeResponse {
        success: true,
        categories: Some(categories),
        error: None,
    })
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "sentiment"
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
