pub mod handlers;
pub mod rate;

use std::sync::Arc;

use axum::Router;
use axum::handler::Handler;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodFilter, MethodRouter, on};
use thiserror::Error;
use tracing::{debug, error};

use crate::error::{ChartError, RateError};
use crate::template::PageTemplate;

pub type AppResult<T> = std::result::Result<T, AppError>;

/// `/chart` serves the HTML page; every other path, `/` included, serves the
/// JSON series.
pub fn build_router(state: AppState) -> Router {
    let series: MethodRouter = get_only(handlers::series).with_state(state.clone());

    Router::new()
        .route("/chart", get_only(handlers::chart))
        .with_state(state)
        .fallback_service(series)
}

// HEAD is routed explicitly, otherwise axum answers it with the GET handler.
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    on(MethodFilter::GET, handler)
        .on(MethodFilter::HEAD, handlers::method_not_allowed)
        .fallback(handlers::method_not_allowed)
}

/// Shared across requests. The template is loaded before the listener starts
/// and never mutated.
#[derive(Clone)]
pub struct AppState {
    template: Arc<PageTemplate>,
}

impl AppState {
    pub fn new(template: PageTemplate) -> Self {
        Self {
            template: Arc::new(template),
        }
    }

    pub fn template(&self) -> &PageTemplate {
        &self.template
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid query string: {0}")]
    Query(#[from] QueryRejection),
    #[error(transparent)]
    Rate(#[from] RateError),
    #[error("failed to encode series: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to render chart: {0}")]
    Chart(#[from] ChartError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Bodies stay empty: client errors carry no detail and server
        // errors are only reported in the log.
        match self {
            AppError::Query(_) | AppError::Rate(_) => {
                debug!(error = %self, "rejecting request");
                StatusCode::BAD_REQUEST.into_response()
            }
            AppError::Encode(_) | AppError::Chart(_) => {
                error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
