use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::error;
use tunebridge_application::{AppState, Conversion, ConversionError};
use tunebridge_domain::Platform;
use tunebridge_matching::confidence_label;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// Source platform tag: "spotify", "yandex", or "yandex_music".
    pub platform: String,
    /// Track id on the source platform.
    pub track_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    pub matched: bool,
    /// Display-ready reply line(s).
    pub reply: String,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<Conversion> for ConvertResponse {
    fn from(conversion: Conversion) -> Self {
        let reply = conversion.reply_text();
        match conversion.result {
            Some(matched) => Self {
                matched: true,
                reply,
                source_url: conversion.source.url,
                target_url: Some(matched.song.url),
                match_score: Some(matched.match_score),
                confidence: Some(confidence_label(i32::from(matched.match_score))),
            },
            None => Self {
                matched: false,
                reply,
                source_url: conversion.source.url,
                target_url: None,
                match_score: None,
                confidence: None,
            },
        }
    }
}

/// Convert a track to its best equivalent on the opposite platform.
#[utoipa::path(
    post,
    path = "/api/v1/convert",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion completed (matched or not)", body = ConvertResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Source track not found", body = ErrorResponse),
        (status = 502, description = "Source catalog unreachable", body = ErrorResponse)
    ),
    tag = "conversion"
)]
pub async fn convert_track(
    State(state): State<AppState>,
    Json(request): Json<ConvertRequest>,
) -> impl IntoResponse {
    let Some(platform) = Platform::parse(&request.platform) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("unknown platform '{}'", request.platform),
            }),
        )
            .into_response();
    };

    let track_id = request.track_id.trim();
    if track_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "track_id is required".to_string(),
            }),
        )
            .into_response();
    }

    match state.conversion.convert(platform, track_id).await {
        Ok(conversion) => (StatusCode::OK, Json(ConvertResponse::from(conversion))).into_response(),
        Err(err @ ConversionError::TrackNotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
        Err(err @ ConversionError::SourceLookup(_)) => {
            error!(target: "api", error = %err, "conversion failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
