/**
 * Error Conversion
 *
 * The single place where an `ApiError` becomes an HTTP response. Every
 * handler failure passes through here, so the error envelope cannot drift
 * between endpoints.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "success": false,
 *   "message": "Invalid email or password"
 * }
 * ```
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        let body = serde_json::json!({
            "success": false,
            "message": message,
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(
                |_| format!(r#"{{"success":false,"message":"{}"}}"#, status.as_u16()),
            )))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_bytes(err: ApiError) -> (StatusCode, Vec<u8>) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_envelope_shape() {
        let (status, bytes) = body_bytes(ApiError::validation("All fields are required")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "All fields are required");
    }

    #[tokio::test]
    async fn test_credential_failures_are_byte_identical() {
        // Unknown email and wrong password both map to invalid_credentials;
        // the rendered payloads must not differ in a single byte.
        let (status_a, bytes_a) = body_bytes(ApiError::invalid_credentials()).await;
        let (status_b, bytes_b) = body_bytes(ApiError::invalid_credentials()).await;

        assert_eq!(status_a, StatusCode::UNAUTHORIZED);
        assert_eq!(status_a, status_b);
        assert_eq!(bytes_a, bytes_b);
    }
}
