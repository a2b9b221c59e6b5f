//! Request body extraction for the generation routes.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// JSON body where an empty (or all-whitespace) body reads as `{}`.
///
/// Malformed JSON is still rejected with a 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e.body_text())))?;

        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        let Json(value) = Json::<T>::from_bytes(body)?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoryRequest;
    use axum::body::Body;

    async fn extract(body: &'static str) -> Result<JsonBody<StoryRequest>, AppError> {
        let req = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        JsonBody::<StoryRequest>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn empty_body_reads_as_empty_object() {
        let JsonBody(req) = extract("").await.unwrap();
        assert_eq!(req.age.to_string(), "undefined");
        assert_eq!(req.topic.to_string(), "undefined");
    }

    #[tokio::test]
    async fn whitespace_body_reads_as_empty_object() {
        let JsonBody(req) = extract(" \n").await.unwrap();
        assert_eq!(req.age.to_string(), "undefined");
    }

    #[tokio::test]
    async fn populated_body_is_parsed() {
        let JsonBody(req) = extract(r#"{"age":4,"topic":"boats"}"#).await.unwrap();
        assert_eq!(req.age.to_string(), "4");
        assert_eq!(req.topic.to_string(), "boats");
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let err = extract("{not json").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
