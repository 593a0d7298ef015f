//! Error types for document/XML transcoding

/// Result type alias for transcoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a document cannot be converted to or from XML
///
/// `MalformedXml` originates from caller-supplied XML text; the other
/// variants originate from the transcoding itself. The enum is `Clone` so
/// a response can carry a captured transcoding failure as a value.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Input XML text is not well-formed
    #[error("malformed XML input: {0}")]
    MalformedXml(String),

    /// JSON document could not be mapped to an element tree
    #[error("JSON to XML transformation failed: {0}")]
    JsonToXml(String),

    /// Element tree could not be mapped back to a document
    #[error("XML to JSON transformation failed: {0}")]
    XmlToJson(String),

    /// Element tree could not be written out as XML text
    #[error("XML serialization failed: {0}")]
    Serialize(String),
}
