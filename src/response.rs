//! Standard response envelope helpers. `data` always leaves with camelCase keys.

use crate::convert::ConvertKeys;
use crate::error::{ErrorBody, ErrorDetail};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct SuccessMany<T> {
    pub data: Vec<T>,
    pub meta: MetaCount,
}

#[derive(Serialize)]
pub struct MetaCount {
    pub count: u64,
}

fn one<T: ConvertKeys + Serialize>(status: StatusCode, data: &T) -> (StatusCode, Json<SuccessOne<T>>) {
    (
        status,
        Json(SuccessOne {
            data: data.to_camel(),
            meta: None,
        }),
    )
}

fn many<T: ConvertKeys + Serialize>(status: StatusCode, rows: &[T]) -> (StatusCode, Json<SuccessMany<T>>) {
    let data: Vec<T> = rows.iter().map(ConvertKeys::to_camel).collect();
    let count = data.len() as u64;
    tracing::debug!(count, "camelized rows for response");
    (
        status,
        Json(SuccessMany {
            data,
            meta: MetaCount { count },
        }),
    )
}

pub fn success_one<T: ConvertKeys + Serialize>(data: &T) -> (StatusCode, Json<SuccessOne<T>>) {
    one(StatusCode::CREATED, data)
}

pub fn success_one_ok<T: ConvertKeys + Serialize>(data: &T) -> (StatusCode, Json<SuccessOne<T>>) {
    one(StatusCode::OK, data)
}

pub fn success_many<T: ConvertKeys + Serialize>(rows: &[T]) -> (StatusCode, Json<SuccessMany<T>>) {
    many(StatusCode::OK, rows)
}

pub fn success_many_created<T: ConvertKeys + Serialize>(rows: &[T]) -> (StatusCode, Json<SuccessMany<T>>) {
    many(StatusCode::CREATED, rows)
}

/// Error envelope shared by `AppError` and the router fallback; `details` is omitted when `None`.
pub fn error_body(code: &str, message: String, details: Option<serde_json::Value>) -> ErrorBody {
    ErrorBody {
        error: ErrorDetail {
            code: code.to_string(),
            message,
            details,
        },
    }
}
