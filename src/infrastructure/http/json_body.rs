//! JSON request body extractor
//!
//! Wraps axum's `Json` so malformed or wrongly typed bodies are answered
//! with 400 Bad Request instead of 422, in the same `(StatusCode, String)`
//! shape as every other API error.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// A deserialized JSON request body
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_response(rejection)),
        }
    }
}

fn rejection_response(rejection: JsonRejection) -> (StatusCode, String) {
    let status = match &rejection {
        JsonRejection::MissingJsonContentType(_) => rejection.status(),
        _ => StatusCode::BAD_REQUEST,
    };
    (status, rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, routing::post, Router};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        count: u32,
    }

    async fn handler(JsonBody(payload): JsonBody<Payload>) -> String {
        payload.count.to_string()
    }

    async fn status_for(body: &'static str, content_type: Option<&str>) -> StatusCode {
        let app = Router::new().route("/", post(handler));
        let mut request = HttpRequest::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }
        let request = request.body(Body::from(body)).unwrap();

        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_valid_body() {
        assert_eq!(
            status_for(r#"{"count": 3}"#, Some("application/json")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_bad_bodies_are_bad_requests() {
        let json = Some("application/json");
        assert_eq!(status_for(r#"{"count": 3.5}"#, json).await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for(r#"{"count": -1}"#, json).await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for(r#"{}"#, json).await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for("not json", json).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        assert_eq!(
            status_for(r#"{"count": 3}"#, None).await,
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }
}
