//! HTTP surface.
//!
//! Handlers are thin: parse and validate the query string, load the records,
//! hand off to the pipeline. The shared state is only a handle to the data
//! source, so requests never observe each other.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::criteria::ListParams;
use crate::error::{ApiError, FieldIssue, ValidationError};
use crate::facets;
use crate::pipeline;
use crate::response::{ApplicationTypesResponse, ServiceInfo, SourcesResponse};
use crate::source::DataSource;

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn DataSource>,
}

/// Builds the application router over `source`.
pub fn router(source: Arc<dyn DataSource>) -> Router {
    Router::new()
        .route("/", get(root).fallback(method_not_allowed))
        .route("/api/sources", get(list_sources).fallback(method_not_allowed))
        .route(
            "/api/application_type",
            get(list_application_types).fallback(method_not_allowed),
        )
        .route(
            "/api/candidates",
            get(list_candidates).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(AppState { source })
}

/// Binds `addr` and serves until Ctrl-C.
pub async fn serve(addr: SocketAddr, source: Arc<dyn DataSource>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(source))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with an error")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "cannot listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

async fn list_sources(State(state): State<AppState>) -> Result<Json<SourcesResponse>, ApiError> {
    let records = state.source.load()?;
    Ok(Json(SourcesResponse {
        sources: facets::sources(&records),
    }))
}

async fn list_application_types(
    State(state): State<AppState>,
) -> Result<Json<ApplicationTypesResponse>, ApiError> {
    let records = state.source.load()?;
    Ok(Json(ApplicationTypesResponse {
        application_type: facets::application_types(&records),
    }))
}

async fn list_candidates(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let params = parse_list_params(query.as_deref().unwrap_or_default())?;
    let records = state.source.load()?;
    let body = pipeline::run(&records, &params);
    Ok(Json(body).into_response())
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not Found"})))
}

async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"detail": "Method Not Allowed"})),
    )
}

/// Decodes a raw query string, keeping repeated keys.
fn parse_list_params(raw: &str) -> Result<ListParams, ValidationError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).map_err(|error| {
        ValidationError::single(FieldIssue::new(
            "query",
            "query_parsing",
            error.to_string(),
        ))
    })?;
    ListParams::from_pairs(pairs)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(error) => {
                tracing::warn!(%error, "rejected candidate query");
                let detail: Vec<_> = error
                    .issues
                    .iter()
                    .map(|issue| {
                        json!({
                            "type": issue.kind,
                            "loc": ["query", issue.param],
                            "msg": issue.message,
                        })
                    })
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": detail })),
                )
                    .into_response()
            }
            ApiError::DataSource(error) => {
                tracing::error!(%error, "failed to load candidates");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_keeps_repeated_keys_and_decodes() {
        let params = parse_list_params(
            "search=Acme%20Corp&source=linkedin&source=referral&per_page=10&page=2",
        )
        .unwrap();
        assert_eq!(params.criteria.search.as_deref(), Some("Acme Corp"));
        assert_eq!(
            params.criteria.source,
            Some(vec!["linkedin".to_string(), "referral".to_string()])
        );
        assert_eq!(params.page.page(), 2);
        assert_eq!(params.page.per_page(), 10);
    }

    #[test]
    fn plus_decodes_to_space() {
        let params = parse_list_params("search=data+engineer").unwrap();
        assert_eq!(params.criteria.search.as_deref(), Some("data engineer"));
    }

    #[test]
    fn empty_query_string_uses_defaults() {
        assert_eq!(parse_list_params("").unwrap(), ListParams::default());
    }
}
