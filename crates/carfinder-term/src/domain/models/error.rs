use thiserror::Error;

/// Failures of the vehicle data source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VpicError {
    /// The request never produced a response (connect, DNS, reset).
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON envelope.
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}
