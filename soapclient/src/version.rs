//! SOAP protocol version constants

use std::fmt;

/// SOAP 1.1 envelope namespace URI
pub const SOAP_11_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// SOAP 1.2 envelope namespace URI
pub const SOAP_12_ENVELOPE_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// SOAP protocol version
///
/// The version fixes the envelope namespace and how the action travels:
/// SOAP 1.1 sends a separate quoted `SOAPAction` header, SOAP 1.2 embeds
/// the action as a `Content-Type` parameter and must not send the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoapVersion {
    Soap11,
    Soap12,
}

impl SoapVersion {
    /// Envelope namespace URI fixed by the protocol version
    pub fn envelope_namespace(&self) -> &'static str {
        match self {
            SoapVersion::Soap11 => SOAP_11_ENVELOPE_NS,
            SoapVersion::Soap12 => SOAP_12_ENVELOPE_NS,
        }
    }

    /// `Content-Type` value for the outgoing request
    pub fn content_type(&self, action: &str) -> String {
        match self {
            SoapVersion::Soap11 => "text/xml; charset=utf-8".to_string(),
            SoapVersion::Soap12 => {
                format!(r#"application/soap+xml; charset=utf-8; action="{action}""#)
            }
        }
    }

    /// Quoted `SOAPAction` header value; `None` for SOAP 1.2, which must
    /// not send one
    pub fn soap_action_header(&self, action: &str) -> Option<String> {
        match self {
            SoapVersion::Soap11 => Some(format!(r#""{action}""#)),
            SoapVersion::Soap12 => None,
        }
    }
}

impl fmt::Display for SoapVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SoapVersion::Soap11 => "SOAP 1.1",
            SoapVersion::Soap12 => "SOAP 1.2",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_namespaces() {
        assert_eq!(
            SoapVersion::Soap11.envelope_namespace(),
            "http://schemas.xmlsoap.org/soap/envelope/"
        );
        assert_eq!(
            SoapVersion::Soap12.envelope_namespace(),
            "http://www.w3.org/2003/05/soap-envelope"
        );
    }

    #[test]
    fn test_soap11_action_travels_as_header() {
        assert_eq!(SoapVersion::Soap11.content_type("urn:Echo"), "text/xml; charset=utf-8");
        assert_eq!(
            SoapVersion::Soap11.soap_action_header("urn:Echo"),
            Some(r#""urn:Echo""#.to_string())
        );
    }

    #[test]
    fn test_soap12_action_travels_in_content_type() {
        assert_eq!(
            SoapVersion::Soap12.content_type("urn:Echo"),
            r#"application/soap+xml; charset=utf-8; action="urn:Echo""#
        );
        assert_eq!(SoapVersion::Soap12.soap_action_header("urn:Echo"), None);
    }
}
