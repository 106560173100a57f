//! Travel-package handlers: list, create, read, update, delete.
//!
//! Rows leave through the response helpers (camelCase keys); bodies enter through `SnakeJson` (snake_case fields).

use crate::error::AppError;
use crate::extractors::SnakeJson;
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::{CatalogService, NewPackage, PackagePatch};
use crate::state::AppState;
use crate::store::ListFilter;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::collections::HashMap;
use uuid::Uuid;

fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest("invalid uuid".into()))
}

fn parse_featured(key: &str, value: &str) -> Result<bool, AppError> {
    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AppError::BadRequest(format!("invalid {} value: {}", key, value))),
    }
}

/// `featured` and its camelCase alias `isFeatured` are mutually exclusive.
fn list_filter(params: &HashMap<String, String>) -> Result<ListFilter, AppError> {
    let featured = match (params.get("featured"), params.get("isFeatured")) {
        (Some(_), Some(_)) => {
            return Err(AppError::BadRequest("use either featured or isFeatured, not both".into()));
        }
        (Some(v), None) => Some(parse_featured("featured", v)?),
        (None, Some(v)) => Some(parse_featured("isFeatured", v)?),
        (None, None) => None,
    };
    Ok(ListFilter {
        featured,
        limit: params.get("limit").and_then(|v| v.parse().ok()),
        offset: params.get("offset").and_then(|v| v.parse().ok()),
    })
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let filter = list_filter(&params)?;
    let rows = CatalogService::list(&state.store, &filter)?;
    Ok(success_many(&rows))
}

pub async fn create(
    State(state): State<AppState>,
    SnakeJson(body): SnakeJson<NewPackage>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let row = CatalogService::create(&state.store, &body)?;
    Ok(success_one(&row))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = CatalogService::read(&state.store, id)?
        .ok_or_else(|| AppError::NotFound(format!("package {}", id)))?;
    Ok(success_one_ok(&row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    SnakeJson(body): SnakeJson<PackagePatch>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = CatalogService::update(&state.store, id, &body)?
        .ok_or_else(|| AppError::NotFound(format!("package {}", id)))?;
    Ok(success_one_ok(&row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    CatalogService::delete(&state.store, id)?
        .ok_or_else(|| AppError::NotFound(format!("package {}", id)))?;
    Ok(StatusCode::NO_CONTENT)
}
