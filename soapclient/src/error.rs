//! Error types for SOAP dispatch

/// Result type alias for SOAP client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or dispatching a SOAP request
///
/// A transformation failure on the request path is fatal: no envelope can
/// be built without a body. Response-side transcoding failures are *not*
/// represented here; they are captured inside
/// [`SoapResponse`](crate::SoapResponse) so the call still produces a
/// value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Body or header could not be converted between document and XML form
    #[error("transformation failed: {0}")]
    Transformation(#[from] soapdoc::Error),

    /// The HTTP round-trip could not be completed (connection failure,
    /// timeout, cancellation, body read failure)
    #[error("SOAP transport failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint address is not a valid URL
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Operation name not present in the registry
    #[error("unknown SOAP operation: {0}")]
    UnknownOperation(String),
}
