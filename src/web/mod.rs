//! Web host for the portfolio page.
//!
//! Serves the server-rendered page plus a small JSON API. The catalog is
//! shared read-only between requests; filter state arrives with each request
//! and nothing is kept per visitor.
//!
//! # Endpoints
//!
//! - `GET /` - The page (optional `?category=&tech=&sort=`)
//! - `GET /health` - Health check
//! - `GET /api/projects` - Filtered, sorted projects (same query as `/`)
//! - `GET /api/options` - Dropdown option lists
//! - `GET /api/technologies` - Technology showcase groups
//! - `GET /api/blog` - Blog teasers
//! - `GET /api/nav` - Navigation entries
//! - `POST /api/sections/active` - Resolve the active section from a batch of
//!   intersection entries
//! - `GET /assets/{*path}` - Embedded stylesheet and page script

pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::app::{PageState, SelectionError};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::export::{export_to_html, Delivery};
use crate::models::{FilterState, Project, SectionId, SortMode, TechGroup};
use crate::services::{FilterOptions, IntersectionEntry, SectionTracker};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web host.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Page content (immutable after load)
    catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates the state, loading the catalog the config points at.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let catalog = Catalog::load(&config)?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Creates the state around an already loaded catalog.
    #[must_use]
    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }

    /// Returns the shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// A fresh page state for one request, starting at the configured sort.
    fn page(&self) -> PageState {
        PageState::with_sort(Arc::clone(&self.catalog), self.config.ui.default_sort)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Filter selection carried in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    /// Category label or `All`
    pub category: Option<String>,
    /// Technology name or `All`
    pub tech: Option<String>,
    /// `category` or `technology`
    pub sort: Option<String>,
}

/// Filtered project list.
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    /// Selection that produced the list
    pub filter: FilterState,
    /// Number of projects returned
    pub count: usize,
    /// Projects in display order
    pub projects: Vec<Project>,
}

/// Dropdown option lists.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    /// Category and technology options, each starting with `All`
    #[serde(flatten)]
    pub options: FilterOptions,
    /// Sort mode values
    pub sort_modes: Vec<SortMode>,
}

/// One blog teaser.
#[derive(Debug, Serialize)]
pub struct BlogPostResponse {
    /// Post title
    pub title: String,
    /// Publication date (`YYYY-MM-DD`)
    pub published: String,
    /// Month and year as shown on the page
    pub display_date: String,
}

/// One navigation entry with its resolved link target.
#[derive(Debug, Serialize)]
pub struct NavItemResponse {
    /// Section identifier
    pub id: SectionId,
    /// Link text
    pub label: String,
    /// Anchor the link points at
    pub href: String,
}

/// A batch of visibility reports from the browser.
#[derive(Debug, Deserialize)]
pub struct ActiveSectionRequest {
    /// Section highlighted before this batch
    #[serde(default)]
    pub previous: SectionId,
    /// Entries in the order the browser delivered them
    #[serde(default)]
    pub entries: Vec<IntersectionEntry>,
}

/// Section to highlight after a batch.
#[derive(Debug, Serialize)]
pub struct ActiveSectionResponse {
    /// Active section
    pub active: SectionId,
    /// Whether it differs from the request's `previous`
    pub changed: bool,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        Self::with_details("Invalid filter selection", err.to_string())
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// Builds the page state for a query, rejecting values that are not offered.
fn page_for_query(state: &AppState, query: &FilterQuery) -> ApiResult<PageState> {
    let mut page = state.page();
    page.apply_selection(
        query.category.as_deref(),
        query.tech.as_deref(),
        query.sort.as_deref(),
    )
    .map_err(|e| {
        debug!("Rejected filter selection: {e}");
        (StatusCode::BAD_REQUEST, Json(ApiError::from(e)))
    })?;
    Ok(page)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET / - Server-rendered page.
async fn index(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Html<String>> {
    let page = page_for_query(&state, &query)?;
    let observer = state.config.tracker.observer_options();
    Ok(Html(export_to_html(&page, Delivery::Served(&observer))))
}

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/projects - Filtered, sorted projects.
async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Json<ProjectsResponse>> {
    let page = page_for_query(&state, &query)?;
    let projects: Vec<Project> = page.visible_projects().cloned().collect();
    Ok(Json(ProjectsResponse {
        filter: page.filter().clone(),
        count: projects.len(),
        projects,
    }))
}

/// GET /api/options - Dropdown option lists.
async fn list_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        options: FilterOptions::derive(&state.catalog.projects),
        sort_modes: SortMode::ALL.to_vec(),
    })
}

/// GET /api/technologies - Technology showcase.
async fn list_technologies(State(state): State<AppState>) -> Json<Vec<TechGroup>> {
    Json(state.catalog.technology_groups.clone())
}

/// GET /api/blog - Blog teasers, newest first.
async fn list_blog_posts(State(state): State<AppState>) -> Json<Vec<BlogPostResponse>> {
    Json(
        state
            .catalog
            .blog_posts
            .iter()
            .map(|post| BlogPostResponse {
                title: post.title.clone(),
                published: post.published.to_string(),
                display_date: post.display_date(),
            })
            .collect(),
    )
}

/// GET /api/nav - Navigation entries.
async fn list_nav(State(state): State<AppState>) -> Json<Vec<NavItemResponse>> {
    Json(
        state
            .catalog
            .nav_items
            .iter()
            .map(|item| NavItemResponse {
                id: item.id,
                label: item.label.clone(),
                href: item.target(),
            })
            .collect(),
    )
}

/// POST /api/sections/active - Resolve the active section.
async fn resolve_active_section(
    Json(request): Json<ActiveSectionRequest>,
) -> Json<ActiveSectionResponse> {
    let mut tracker = SectionTracker::starting_at(request.previous);
    let changed = tracker.apply(&request.entries);
    Json(ActiveSectionResponse {
        active: tracker.active(),
        changed,
    })
}

// ============================================================================
// Router
// ============================================================================

/// Creates the router with all routes, CORS, and HTTP tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/projects", get(list_projects))
        .route("/api/options", get(list_options))
        .route("/api/technologies", get(list_technologies))
        .route("/api/blog", get(list_blog_posts))
        .route("/api/nav", get(list_nav))
        .route("/api/sections/active", post(resolve_active_section))
        .route("/assets/{*path}", get(static_files::serve_asset))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the address cannot be
/// bound.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting portfolio web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::with_catalog(Config::default(), Catalog::embedded().unwrap())
    }

    #[test]
    fn test_page_for_query_defaults() {
        let page = page_for_query(&state(), &FilterQuery::default()).unwrap();
        assert_eq!(page.visible_count(), 4);
        assert_eq!(page.filter().sort_by, SortMode::Category);
    }

    #[test]
    fn test_page_for_query_rejects_unknown_category() {
        let query = FilterQuery {
            category: Some("Mobile".to_string()),
            ..FilterQuery::default()
        };
        let (status, Json(body)) = page_for_query(&state(), &query).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid filter selection");
        assert!(body.details.unwrap().contains("Mobile"));
    }

    #[test]
    fn test_default_sort_comes_from_config() {
        let mut config = Config::default();
        config.ui.default_sort = SortMode::Technology;
        let state = AppState::with_catalog(config, Catalog::embedded().unwrap());
        assert_eq!(state.page().filter().sort_by, SortMode::Technology);
    }
}
