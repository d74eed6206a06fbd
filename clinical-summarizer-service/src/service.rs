use axum::{
    Router,
    extract::{Request, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode},
    middleware::{Next, from_fn},
    response::{Json, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Instrument, error, info, warn};
use uuid::Uuid;

use crate::{
    analyzer::{Analyzer, AnalyzerConfig},
    config::ServiceConfig,
    models::{SummarizeRequest, SummarizeResponse},
    storage::SummaryStore,
};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;
type ApiError = (StatusCode, Json<Value>);

const CORRELATION_ID_HEADER: &str = "x-correlation-id";

fn bad_request_error(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn internal_error(message: &str, details: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": message,
            "details": details
        })),
    )
}

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub store: SummaryStore,
}

impl AppState {
    pub fn new(analyzer: Analyzer, store: SummaryStore) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            store,
        }
    }
}

pub async fn create_app(config: &ServiceConfig) -> anyhow::Result<Router> {
    let app_state = create_app_state(config).await?;
    Ok(build_router(app_state))
}

async fn create_app_state(config: &ServiceConfig) -> anyhow::Result<AppState> {
    let analyzer = Analyzer::new(AnalyzerConfig::default())?;
    let store = SummaryStore::new(&config.database_path);
    store.init().await?;

    Ok(AppState::new(analyzer, store))
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/summarize", post(summarize))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(correlation_id_middleware))
        .with_state(app_state)
}

async fn correlation_id_middleware(mut request: Request, next: Next) -> Response {
    let correlation_id = Uuid::new_v4().to_string();

    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        request.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }

    let span = tracing::info_span!("http_request", correlation_id = %correlation_id);
    next.run(request).instrument(span).await
}

async fn root() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Clinical Document Summarizer API is running",
        "endpoint": "/summarize (POST)"
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<SummarizeResponse> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected summarize request: {}", rejection.body_text());
        bad_request_error("Document text is required")
    })?;

    let request = SummarizeRequest::from_json(&body).ok_or_else(|| {
        warn!("Rejected summarize request: no string document field");
        bad_request_error("Document text is required")
    })?;

    info!(
        document_length = request.document.len(),
        "Summarizing clinical document"
    );

    let analysis = state.analyzer.analyze(&request.document);

    let record_id = state
        .store
        .insert(&request.document, &analysis.summary)
        .await
        .map_err(|e| {
            error!("Failed to store summary: {}", e);
            internal_error("Failed to store summary", &e.to_string())
        })?;

    info!(
        record_id,
        diseases = analysis.detected_diseases.len(),
        medications = analysis.medications.len(),
        "Summary stored"
    );

    Ok(Json(SummarizeResponse {
        analysis,
        abbreviation_reference: state.analyzer.abbreviation_reference(),
    }))
}
