//! Request extractors
//!
//! Both extractors reject with [`AppError`] so every failure reaches the
//! client in the unified JSON error format.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use http::request::Parts;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::utils::AppError;

/// JSON request body that must be present and not `null`
///
/// An absent, `null` or unparseable body is a [`MalformedRequest`] error
/// (HTTP 400), kept distinct from field validation failures.
///
/// [`MalformedRequest`]: shared::error::ErrorCode::MalformedRequest
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Option<T>>::from_request(req, state).await {
            Ok(Json(Some(value))) => Ok(Payload(value)),
            Ok(Json(None)) => {
                tracing::error!("Could not proceed with request as it was empty");
                Err(AppError::malformed("Request body must not be empty"))
            }
            Err(rejection) => {
                let reason = rejection.body_text();
                tracing::error!(%reason, "Could not parse request body");
                Err(AppError::malformed(reason))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: Option<i64>,
}

/// Optional `?id=` query parameter shared by every resource endpoint
#[derive(Debug, Clone, Copy)]
pub struct IdParam(pub Option<i64>);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<IdQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;
        Ok(IdParam(query.id))
    }
}

impl IdParam {
    /// The id, or a validation error with `message` when it is absent
    pub fn require(self, message: &str) -> Result<i64, AppError> {
        self.0.ok_or_else(|| {
            tracing::error!("{message}");
            AppError::validation(message)
        })
    }
}
