//! Query string extractor with application-level rejections.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Query string extractor whose rejection is an [`AppError::Validation`].
///
/// Missing or malformed parameters become a 422 response carrying the
/// JSON error body instead of axum's plain-text rejection.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct CreateUserParams {
///     username: String,
///     email: String,
/// }
///
/// async fn create_user(QueryParams(params): QueryParams<CreateUserParams>) {
///     // both parameters are present
/// }
/// ```
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(QueryParams(value))
    }
}
