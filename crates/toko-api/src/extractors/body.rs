//! JSON body extractor with domain-shaped rejections.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use toko_core::error::AppError;

use crate::error::ApiError;

/// `Json` wrapper whose rejection is the standard API error body.
///
/// Axum's own `Json` rejection answers in plain text; every error this API
/// produces is a JSON object with a `message`, malformed bodies included.
/// The parser's diagnostic goes to the logs, not to the client.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection, "request body rejected");
                Err(AppError::validation("Request body is invalid").into())
            }
        }
    }
}
