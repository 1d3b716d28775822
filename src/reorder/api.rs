//! Axum router for the drag-and-drop demo.
//!
//! - `GET /` renders the whole page.
//! - `POST /sort/` applies the submitted order and returns the list fragment.
//! - Any other method on `/sort/` is answered with 405.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use parking_lot::RwLock;

use super::ReorderError;
use super::list::{MovieList, parse_indices};
use super::render::{render_fragment, render_page};

/// Shared router state. The list is process-wide: every client sees and mutates the same order.
#[derive(Clone, Default)]
pub struct AppState {
    pub movies: Arc<RwLock<MovieList>>,
}
impl AppState {
    pub fn new(movies: MovieList) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
        }
    }
    pub fn snapshot(&self) -> MovieList {
        self.movies.read().clone()
    }
}

/// Handler errors, rendered as plain-text responses.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed reorder submission (400).
    BadRequest(String),
    /// Wrong method on a mutation route (405).
    MethodNotAllowed,
    /// Rendering failed (500).
    Internal(String),
}
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}
impl From<ReorderError> for ApiError {
    fn from(err: ReorderError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        log::error!("render error: {err:#}");
        ApiError::Internal("failed to render page".to_string())
    }
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = render_page(&state.movies.read())?;
    Ok(Html(page))
}

pub async fn sort(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, ApiError> {
    let indices = parse_indices(&pairs).inspect_err(|e| log::warn!("rejected reorder: {e}"))?;
    let fragment = {
        let mut movies = state.movies.write();
        movies
            .reorder(&indices)
            .inspect_err(|e| log::warn!("rejected reorder {indices:?}: {e}"))?;
        log::debug!("applied reorder {indices:?}");
        render_fragment(&movies)?
    };
    Ok(Html(fragment))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/sort/", post(sort).fallback(method_not_allowed))
        .with_state(state)
}
