//! Mock of the GNews `top-headlines` API.
//!
//! Serves a fixed set of articles (see [`fixtures`]) filtered by the same query
//! parameters the real endpoint takes, so a news client can be exercised
//! end to end without network access or a paid key.

pub mod error;
pub mod fixtures;
pub mod query;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use utoipa::{OpenApi, ToSchema};

use super::ServeError;
use error::{ApiError, ErrorBody};
use fixtures::{Article, Source, mock_articles};
use query::{HeadlinesQuery, RawHeadlinesQuery};

/// Notice the upstream API attaches to free-plan responses.
pub const REAL_TIME_NOTICE: &str = "Real-time news data is only available on paid plans. \
Free plan has a 12-hour delay. Upgrade your plan here to remove the delay: \
https://gnews.io/change-plan";

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock GNews API",
        version = "0.1.0",
        description = "Fixture-backed stand-in for the GNews top-headlines endpoint"
    ),
    paths(top_headlines, health),
    components(schemas(
        TopHeadlines,
        Information,
        RealTimeNotice,
        Article,
        Source,
        ErrorBody,
        HealthResponse
    ))
)]
pub struct ApiDoc;

/// Shared, read-only server state.
#[derive(Debug)]
pub struct NewsState {
    articles: Vec<Article>,
    api_keys: HashSet<String>,
}

impl NewsState {
    pub fn new(articles: Vec<Article>, api_keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            articles,
            api_keys: api_keys.into_iter().collect(),
        }
    }

    /// State with the standard fixtures published relative to now.
    pub fn with_fixtures(api_keys: impl IntoIterator<Item = String>) -> Self {
        Self::new(mock_articles(Utc::now()), api_keys)
    }
}

/// Build the router for the mock API.
pub fn router(state: Arc<NewsState>) -> Router {
    Router::new()
        .route("/v4/top-headlines", get(top_headlines))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_spec))
        .with_state(state)
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_on<F>(
    listener: TcpListener,
    state: Arc<NewsState>,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServeError::Serve)
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn run_news_server(
    host: &str,
    port: u16,
    state: Arc<NewsState>,
) -> Result<(), ServeError> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|source| ServeError::Bind {
            addr: format!("{host}:{port}"),
            source,
        })?;

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, articles = state.articles.len(), "mock news API listening");
        tracing::info!("OpenAPI spec available at http://{addr}/openapi.json");
    }

    serve_on(listener, state, shutdown_signal()).await?;
    tracing::info!("mock news API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl-C; serving until killed");
        std::future::pending::<()>().await;
    }
}

/// Serve OpenAPI spec as JSON
async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Response envelope of `top-headlines`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopHeadlines {
    /// Plan information
    pub information: Information,
    /// Number of matching articles before truncation to `max`
    pub total_articles: usize,
    /// Matching articles, at most `max`
    pub articles: Vec<Article>,
}

/// Plan information block.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Information {
    pub real_time_articles: RealTimeNotice,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RealTimeNotice {
    pub message: String,
}

impl TopHeadlines {
    pub fn new(total_articles: usize, articles: Vec<Article>) -> Self {
        Self {
            information: Information {
                real_time_articles: RealTimeNotice {
                    message: REAL_TIME_NOTICE.to_string(),
                },
            },
            total_articles,
            articles,
        }
    }
}

/// Top headlines filtered by topic, language and publication window
#[utoipa::path(
    get,
    path = "/v4/top-headlines",
    params(RawHeadlinesQuery),
    responses(
        (status = 200, description = "Matching articles", body = TopHeadlines),
        (status = 400, description = "Missing or unknown API key", body = ErrorBody),
        (status = 422, description = "Invalid query parameter", body = ErrorBody)
    ),
    tag = "news"
)]
pub async fn top_headlines(
    State(state): State<Arc<NewsState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<TopHeadlines>, ApiError> {
    let raw = RawHeadlinesQuery::from_pairs(pairs);
    let query = HeadlinesQuery::validate(raw, &state.api_keys).inspect_err(|e| match e {
        ApiError::MissingApiKey => tracing::warn!("rejected request without a valid API key"),
        ApiError::Validation(msg) => tracing::debug!(%msg, "rejected invalid query"),
    })?;

    let (total, page) = query.select(&state.articles);
    tracing::debug!(
        topic = query.topic.as_str(),
        lang = %query.lang,
        max = query.max,
        total,
        returned = page.len(),
        "top-headlines"
    );

    Ok(Json(TopHeadlines::new(
        total,
        page.into_iter().cloned().collect(),
    )))
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server status
    status: &'static str,
    /// Number of fixture articles loaded
    articles: usize,
}

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
async fn health(State(state): State<Arc<NewsState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        articles: state.articles.len(),
    })
}
