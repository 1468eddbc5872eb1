use axum::response::{IntoResponse, Response};
use http::StatusCode;

#[derive(Debug, thiserror::Error)]
#[error("{0} not found")]
pub struct NotFound(pub &'static str);

impl IntoResponse for NotFound {
	fn into_response(self) -> Response {
		(StatusCode::NOT_FOUND, self.to_string()).into_response()
	}
}
