use thiserror::Error;

/// Errors produced by the backend client.
#[derive(Error, Debug)]
pub enum ApiError {
	/// Transport failures and non-success status codes.
	#[error("Request error: {0}")]
	Http(#[from] reqwest::Error),

	/// A request body that is not valid JSON (e.g. a hand-written custom
	/// landscape).
	#[error("Payload error: {0}")]
	Payload(#[from] serde_json::Error),
}

/// Convenient Result type using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
