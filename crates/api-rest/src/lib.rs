//! # API REST
//!
//! REST API implementation for EMCode.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for the wire types and `emcode-core` for the
//! determination logic. The server binary in the workspace root serves the
//! router built by [`app`].

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{wire, HealthService};
use emcode_core::{EmCodingService, EmError, ResolutionMode};

/// Application state shared across REST API handlers.
#[derive(Clone)]
struct AppState {
    coding_service: EmCodingService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, calculate_em, list_levels),
    components(schemas(
        wire::HealthRes,
        wire::CalculateEmReq,
        wire::CalculateEmRes,
        wire::ComplexityRanks,
        wire::EmLevelInfo,
        wire::ListLevelsRes,
        wire::ErrorRes,
    ))
)]
struct ApiDoc;

/// Build the EMCode REST application.
///
/// Routes:
/// - `GET /health`
/// - `POST /em/calculate`
/// - `GET /em/levels`
///
/// Swagger UI is served at `/swagger-ui`, the OpenAPI document at
/// `/api-docs/openapi.json`. CORS is permissive.
pub fn app() -> Router {
    let state = AppState {
        coding_service: EmCodingService::new(),
    };

    Router::new()
        .route("/health", get(health))
        .route("/em/calculate", post(calculate_em))
        .route("/em/levels", get(list_levels))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = wire::HealthRes)
    )
)]
/// Health check endpoint for the REST API.
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<wire::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/em/calculate",
    request_body = wire::CalculateEmReq,
    responses(
        (status = 200, description = "E/M level determined", body = wire::CalculateEmRes),
        (status = 400, description = "Unrecognised complexity in strict mode", body = wire::ErrorRes)
    )
)]
/// Determine the E/M level for three complexity inputs.
///
/// All axis fields are optional. By default unrecognised or absent input is
/// coerced to the lowest rank, so the endpoint always answers 200; with
/// `strict: true` the first unrecognised value is rejected as 400.
///
/// # Errors
/// Returns `400 Bad Request` naming the axis and value if strict mode is
/// requested and an axis input does not name a level.
#[axum::debug_handler]
async fn calculate_em(
    State(state): State<AppState>,
    Json(req): Json<wire::CalculateEmReq>,
) -> Result<Json<wire::CalculateEmRes>, (StatusCode, Json<wire::ErrorRes>)> {
    let mode = if req.strict {
        ResolutionMode::Strict
    } else {
        ResolutionMode::Lenient
    };

    match state
        .coding_service
        .calculate(&req.history, &req.exam, &req.mdm, mode)
    {
        Ok(det) => Ok(Json(wire::CalculateEmRes {
            code: det.level.code().to_string(),
            name: det.level.name().to_string(),
            description: det.level.description().to_string(),
            reasoning: det.reasoning,
            ranks: wire::ComplexityRanks {
                history: det.ranks.history.into(),
                exam: det.ranks.exam.into(),
                mdm: det.ranks.mdm.into(),
            },
        })),
        Err(e @ EmError::UnrecognisedComplexity { .. }) => {
            tracing::error!("Calculate E/M error: {:?}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(wire::ErrorRes {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

#[utoipa::path(
    get,
    path = "/em/levels",
    responses(
        (status = 200, description = "E/M reference table", body = wire::ListLevelsRes)
    )
)]
/// The full E/M reference table, 99211-99215.
///
/// 99211 is listed for reference but is never produced by the 2-of-3 rule.
#[axum::debug_handler]
async fn list_levels(State(state): State<AppState>) -> Json<wire::ListLevelsRes> {
    let levels = state
        .coding_service
        .levels()
        .into_iter()
        .map(|level| wire::EmLevelInfo {
            code: level.code().to_string(),
            name: level.name().to_string(),
            description: level.description().to_string(),
        })
        .collect();
    Json(wire::ListLevelsRes { levels })
}
