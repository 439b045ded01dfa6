use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Json};
use crate::catalog::command::query_catalog_cmd::{QueryCatalogCommand, QueryCatalogCommandRequest};
use crate::catalog::command::sample_catalog_cmd::{SampleCatalogCommand, SampleCatalogCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.cache.clone())
}

pub(crate) async fn query_catalog(
    State(state): State<AppState>,
    Query(params): Query<QueryCatalogCommandRequest>) -> Result<impl IntoResponse, ServerError> {
    let svc = build_service(&state);
    let res = QueryCatalogCommand::new(svc).execute(params).await?;
    let headers = [(header::CACHE_CONTROL, state.config.catalog_policy.cache_control())];
    Ok((headers, Json(res)))
}

pub(crate) async fn sample_catalog(
    State(state): State<AppState>,
    Query(params): Query<SampleCatalogCommandRequest>) -> Result<impl IntoResponse, ServerError> {
    let svc = build_service(&state);
    let res = SampleCatalogCommand::new(svc).execute(params).await?;
    let headers = [(header::CACHE_CONTROL, state.config.sample_policy.cache_control())];
    Ok((headers, Json(res)))
}
