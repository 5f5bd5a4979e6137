//! Request extractors that reject with a bare `400`.
//!
//! axum's own `Path` and `Json` extractors answer with `400`, `415` or `422`
//! and a text body depending on what went wrong. The handlers here only ever
//! report `400`, so these wrappers collapse every failure into
//! [`ApiError::BadRequest`].

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, RawPathParams, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// Name of the path parameter holding a resource identity.
pub const ID_PARAM: &str = "id";

/// Identity taken from everything after the resource prefix.
///
/// The by-id routes capture the rest of the path, so `/users/1/x` extracts
/// `1/x` and is rejected here. Routes without the parameter (a bare
/// `/users/`) extract as an empty identifier, rejected the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i64);

impl ResourceId {
    /// Parse a decimal identity. The sign is allowed.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        raw.parse::<i64>()
            .map(ResourceId)
            .map_err(|_| ApiError::BadRequest)
    }

    /// The identity, rejecting negative values.
    pub fn non_negative(self) -> Result<i64, ApiError> {
        match self.0 {
            id if id >= 0 => Ok(id),
            _ => Err(ApiError::BadRequest),
        }
    }
}

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state).await.ok();
        let raw = params
            .as_ref()
            .and_then(|params| {
                params
                    .iter()
                    .find(|(key, _)| *key == ID_PARAM)
                    .map(|(_, value)| value)
            })
            .unwrap_or_default();
        ResourceId::parse(raw)
    }
}

/// JSON request body.
///
/// The `Content-Type` header is not inspected. The first JSON value in the
/// body is decoded into `T`; anything after it is ignored. A `null` body
/// decodes as `T::default()`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest)?;
        let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
        let value: Option<T> =
            Deserialize::deserialize(&mut deserializer).map_err(|_| ApiError::BadRequest)?;
        Ok(JsonBody(value.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_signed_integers() {
        assert_eq!(ResourceId::parse("0").unwrap(), ResourceId(0));
        assert_eq!(ResourceId::parse("42").unwrap(), ResourceId(42));
        assert_eq!(ResourceId::parse("-5").unwrap(), ResourceId(-5));
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(ResourceId(0).non_negative().unwrap(), 0);
        assert!(matches!(
            ResourceId(-1).non_negative(),
            Err(ApiError::BadRequest)
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_identities() {
        for raw in ["", "abc", "1.5", "12a", "1/2", "1/", "99999999999999999999"] {
            assert!(
                matches!(ResourceId::parse(raw), Err(ApiError::BadRequest)),
                "{raw:?} should be rejected"
            );
        }
    }
}
