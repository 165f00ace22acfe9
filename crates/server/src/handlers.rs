use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use phishguard_core::{remediation, RiskLevel, Verdict};
use tracing::{debug, info};

use crate::error::{ApiError, EMPTY_TEXT_MESSAGE, INVALID_BODY_MESSAGE, UNKNOWN_LEVEL_MESSAGE};
use crate::requests::AnalyzeRequest;
use crate::responses::{HealthResponse, RemediationResponse};
use crate::AppState;

pub async fn post_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        debug!(error = %rejection, "rejected analyze body");
        ApiError::Validation(INVALID_BODY_MESSAGE.to_string())
    })?;

    let text = body
        .text()
        .ok_or_else(|| ApiError::Validation(EMPTY_TEXT_MESSAGE.to_string()))?;

    let analysis = state.analyzer.analyze(text).await;
    info!(
        source = analysis.source.as_str(),
        risk_level = %analysis.verdict.risk_level,
        score = analysis.verdict.score,
        flags = analysis.verdict.flags.len(),
        chars = text.chars().count(),
        "analysis complete"
    );

    Ok(Json(analysis.verdict))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online",
        service: "PhishGuard API",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn get_remediation(
    Path(level): Path<String>,
) -> Result<Json<RemediationResponse>, ApiError> {
    let level = level
        .parse::<RiskLevel>()
        .map_err(|e| {
            debug!(error = %e, "rejected remediation level");
            ApiError::Validation(UNKNOWN_LEVEL_MESSAGE.to_string())
        })?;

    Ok(Json(RemediationResponse {
        risk_level: level,
        icon: remediation::icon(level),
        recommendations: remediation::remediation(level),
    }))
}
