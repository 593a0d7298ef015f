//! SOAP envelope construction

use xmltree::{Element, XMLNode};

use crate::version::SoapVersion;

/// Wrap a body element, and optionally a header element, into a SOAP
/// envelope for the given protocol version.
///
/// When `body_namespace` / `header_namespace` is non-blank the
/// corresponding element gets a default `xmlns` declaration on its own tag
/// before wrapping. The header, if present, precedes the body. Input
/// elements are never mutated.
pub fn build_envelope(
    version: SoapVersion,
    body: &Element,
    header: Option<&Element>,
    body_namespace: Option<&str>,
    header_namespace: Option<&str>,
) -> Element {
    let mut envelope = Element::new("s:Envelope");
    envelope.attributes.insert(
        "xmlns:s".to_string(),
        version.envelope_namespace().to_string(),
    );

    if let Some(header_content) = header {
        let mut soap_header = Element::new("s:Header");
        soap_header.children.push(XMLNode::Element(apply_namespace(
            header_content,
            header_namespace,
        )));
        envelope.children.push(XMLNode::Element(soap_header));
    }

    let mut soap_body = Element::new("s:Body");
    soap_body
        .children
        .push(XMLNode::Element(apply_namespace(body, body_namespace)));
    envelope.children.push(XMLNode::Element(soap_body));

    envelope
}

fn apply_namespace(elem: &Element, ns: Option<&str>) -> Element {
    match ns {
        Some(ns) if !ns.trim().is_empty() => soapdoc::with_target_namespace(elem, ns),
        _ => elem.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{SOAP_11_ENVELOPE_NS, SOAP_12_ENVELOPE_NS};

    fn body_elem() -> Element {
        let mut elem = Element::new("Ping");
        elem.children.push(XMLNode::Text("pong".to_string()));
        elem
    }

    #[test]
    fn test_soap11_envelope_without_header() {
        let body = body_elem();
        let envelope = build_envelope(SoapVersion::Soap11, &body, None, None, None);

        assert_eq!(envelope.name, "s:Envelope");
        assert_eq!(
            envelope.attributes.get("xmlns:s"),
            Some(&SOAP_11_ENVELOPE_NS.to_string())
        );

        let children: Vec<&Element> = envelope
            .children
            .iter()
            .filter_map(|n| n.as_element())
            .collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "s:Body");

        // Body is wrapped unmodified
        let wrapped = children[0].children[0].as_element().unwrap();
        assert_eq!(wrapped.name, "Ping");
        assert_eq!(wrapped.get_text().unwrap(), "pong");
        assert!(wrapped.attributes.get("xmlns").is_none());
    }

    #[test]
    fn test_soap12_envelope_with_header_and_namespaces() {
        let body = body_elem();
        let header = Element::new("Auth");
        let envelope = build_envelope(
            SoapVersion::Soap12,
            &body,
            Some(&header),
            Some("ns2"),
            Some("ns1"),
        );

        assert_eq!(
            envelope.attributes.get("xmlns:s"),
            Some(&SOAP_12_ENVELOPE_NS.to_string())
        );

        let children: Vec<&Element> = envelope
            .children
            .iter()
            .filter_map(|n| n.as_element())
            .collect();
        assert_eq!(children.len(), 2);

        // Header precedes body
        assert_eq!(children[0].name, "s:Header");
        assert_eq!(children[1].name, "s:Body");

        let wrapped_header = children[0].children[0].as_element().unwrap();
        assert_eq!(wrapped_header.attributes.get("xmlns"), Some(&"ns1".to_string()));

        let wrapped_body = children[1].children[0].as_element().unwrap();
        assert_eq!(wrapped_body.attributes.get("xmlns"), Some(&"ns2".to_string()));
    }

    #[test]
    fn test_blank_namespace_is_omitted() {
        let body = body_elem();
        let envelope = build_envelope(SoapVersion::Soap11, &body, None, Some("   "), None);

        let soap_body = envelope.get_child("s:Body").unwrap();
        let wrapped = soap_body.children[0].as_element().unwrap();
        assert!(wrapped.attributes.get("xmlns").is_none());
    }

    #[test]
    fn test_serialized_envelope_is_single_line() {
        let body = body_elem();
        let envelope = build_envelope(SoapVersion::Soap11, &body, None, None, None);
        let xml = soapdoc::element_to_string(&envelope).unwrap();

        assert!(!xml.trim_end().contains('\n'));
        assert!(xml.contains(r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">"#));
        assert!(xml.contains("<s:Body><Ping>pong</Ping></s:Body>"));
    }
}
