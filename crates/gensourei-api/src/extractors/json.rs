//! `ValidJson` extractor: JSON body plus `validator` checks.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use gensourei_core::error::AppError;

use crate::error::ApiError;

/// A JSON body that has passed its `Validate` rules.
///
/// Malformed bodies and failed rules are both reported as `INVALID_INPUT`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::invalid_input(errors.to_string()))?;

        Ok(Self(value))
    }
}
