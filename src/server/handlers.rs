use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::rate::{rate_param, resolve_rate};
use super::{AppResult, AppState};
use crate::chart::render_series_charts;
use crate::config::ITERATIONS;
use crate::signal::{frequency_transform, logistic_map};
use crate::template::Page;

type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// JSON body of `GET /`.
#[derive(Serialize)]
pub struct SeriesPair {
    #[serde(serialize_with = "finite_series")]
    pub time: [f64; ITERATIONS],
    #[serde(serialize_with = "finite_series")]
    pub frequency: [f64; ITERATIONS],
}

// JSON numbers cannot carry NaN or infinities
fn finite_series<S: Serializer>(series: &[f64; ITERATIONS], serializer: S) -> Result<S::Ok, S::Error> {
    if let Some(value) = series.iter().find(|v| !v.is_finite()) {
        return Err(S::Error::custom(format!("unsupported value: {value}")));
    }
    serializer.collect_seq(series.iter())
}

fn requested_rate(query: QueryPairs) -> AppResult<f64> {
    let Query(pairs) = query?;
    Ok(resolve_rate(rate_param(&pairs))?)
}

// Content types are set up front so they also ride on error responses.

pub async fn series(query: QueryPairs) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], series_body(query))
}

fn series_body(query: QueryPairs) -> AppResult<Vec<u8>> {
    let rate = requested_rate(query)?;
    debug!(rate, "computing series");

    let time = logistic_map(rate);
    let frequency = frequency_transform(&time);

    Ok(serde_json::to_vec(&SeriesPair { time, frequency })?)
}

pub async fn chart(State(state): State<AppState>, query: QueryPairs) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        chart_page(&state, query),
    )
}

fn chart_page(state: &AppState, query: QueryPairs) -> AppResult<String> {
    let rate = requested_rate(query)?;
    debug!(rate, "rendering charts");

    let time = logistic_map(rate);
    let frequency = frequency_transform(&time);

    let body = render_series_charts(&time, &frequency)?;
    Ok(state.template().render(&Page::new(rate, body)))
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}
