//! Extract a camelCase JSON body as a snake_case typed payload.

use crate::case::KeyCase;
use crate::convert::{colliding_keys, from_camel_json};
use crate::error::AppError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body extractor: reads JSON, renames every key to snake_case, then deserializes into `T`.
///
/// A missing/invalid JSON body is a 400 (413 past the body limit); a body that does not fit `T` is a 422.
#[derive(Clone, Debug)]
pub struct SnakeJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for SnakeJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(rejection.body_text())
                } else {
                    AppError::BadRequest(rejection.body_text())
                }
            })?;
        if let Value::Object(fields) = &body {
            let lost = colliding_keys(fields.keys(), KeyCase::Snake);
            if !lost.is_empty() {
                tracing::warn!(keys = ?lost, "request body keys collide after snake_case conversion; later keys win");
            }
        }
        let inner = from_camel_json(body).map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(SnakeJson(inner))
    }
}
