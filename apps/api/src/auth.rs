//! Principal context handed over by the upstream auth layer.
//!
//! Authentication happens before requests reach this service; the resolved
//! user id arrives in the `x-user-id` header.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use uuid::Uuid;

use crate::errors::AppError;

pub const PRINCIPAL_HEADER: &str = "x-user-id";

/// The authenticated caller of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        principal_from_headers(&parts.headers)
            .map(|id| AuthenticatedUser { id })
            .ok_or(AppError::Unauthorized)
    }
}

fn principal_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    let raw = headers.get(PRINCIPAL_HEADER)?.to_str().ok()?.trim();
    Uuid::parse_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_principal_is_read_from_header() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            PRINCIPAL_HEADER,
            HeaderValue::from_str(&format!(" {id} ")).unwrap(),
        );
        assert_eq!(principal_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_missing_or_garbage_header_yields_none() {
        assert_eq!(principal_from_headers(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(PRINCIPAL_HEADER, HeaderValue::from_static("admin"));
        assert_eq!(principal_from_headers(&headers), None);
    }
}
