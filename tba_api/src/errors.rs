//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or undecodable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was valid JSON but not the shape the endpoint documents,
    /// e.g. an error object where a list was expected.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}
