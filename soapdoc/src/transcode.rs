//! Document ↔ XML element tree conversion

use serde_json::{Map, Value};
use std::io::BufReader;
use xmltree::{Element, EmitterConfig, XMLNode};

use crate::error::{Error, Result};

/// Reserved document key holding the XML attributes of the enclosing element
pub const ATTRIBUTES_KEY: &str = "@attributes";

/// Reserved document key holding text content of an element that also
/// carries attributes or child elements
pub const TEXT_KEY: &str = "#text";

/// Convert a JSON document into an XML element tree.
///
/// The document root must be an object with exactly one key; that key names
/// the root element. Objects map to child elements, arrays to repeated
/// same-named siblings, scalars to text content and `null` to an empty
/// element. [`ATTRIBUTES_KEY`] and [`TEXT_KEY`] entries map to attributes
/// and text content of the enclosing element.
pub fn document_to_xml(doc: &Value) -> Result<Element> {
    let root = match doc {
        Value::Object(map) => map,
        other => {
            return Err(Error::JsonToXml(format!(
                "document root must be an object naming the root element, got {}",
                value_kind(other)
            )));
        }
    };

    if root.len() != 1 {
        return Err(Error::JsonToXml(format!(
            "document root must contain exactly one key, got {}",
            root.len()
        )));
    }

    // Single entry, checked above
    let (name, value) = root
        .iter()
        .next()
        .ok_or_else(|| Error::JsonToXml("document root is empty".to_string()))?;

    build_element(name, value)
}

/// Convert an XML element tree into a JSON document.
///
/// Repeated same-named siblings collapse into an array under that name;
/// text-only elements become strings, empty elements become `null`,
/// attributes are gathered under [`ATTRIBUTES_KEY`]. All leaves are
/// strings: XML text content carries no type information. Text is kept
/// verbatim, surrounding whitespace included; whitespace-only content
/// counts as empty.
///
/// Collapsing is lossy for single-element arrays; an array of one entry
/// comes back as a plain value. Fails when an element name collides with
/// a reserved document key (only possible on hand-built trees; such names
/// never survive a parse).
pub fn xml_to_document(xml: &Element) -> Result<Value> {
    check_name(&xml.name)?;
    let mut root = Map::new();
    root.insert(xml.name.clone(), element_value(xml)?);
    Ok(Value::Object(root))
}

/// Parse raw XML text and convert it into a JSON document.
pub fn document_from_str(xml_text: &str) -> Result<Value> {
    let root = parse_element(xml_text)?;
    xml_to_document(&root)
}

/// Parse raw XML text into an element tree.
pub fn parse_element(xml_text: &str) -> Result<Element> {
    let reader = BufReader::new(xml_text.as_bytes());
    Element::parse(reader).map_err(|e| Error::MalformedXml(e.to_string()))
}

/// Serialize an element tree to single-line XML text with a document
/// declaration. No indentation: strict SOAP receivers are
/// whitespace-sensitive.
pub fn element_to_string(xml: &Element) -> Result<String> {
    let mut buf = Vec::new();
    let config = EmitterConfig::new()
        .write_document_declaration(true)
        .perform_indent(false);
    xml.write_with_config(&mut buf, config)
        .map_err(|e| Error::Serialize(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| Error::Serialize(e.to_string()))
}

fn build_element(name: &str, value: &Value) -> Result<Element> {
    if value.is_array() {
        // An array expands into repeated siblings in its parent; at the
        // root there is no parent to attach them to.
        return Err(Error::JsonToXml(format!(
            "array value under `{name}` would produce multiple root elements"
        )));
    }
    let mut elem = Element::new(name);
    fill_element(&mut elem, value)?;
    Ok(elem)
}

fn fill_element(elem: &mut Element, value: &Value) -> Result<()> {
    match value {
        Value::Null => {}
        Value::String(s) => elem.children.push(XMLNode::Text(s.clone())),
        Value::Number(n) => elem.children.push(XMLNode::Text(n.to_string())),
        Value::Bool(b) => elem.children.push(XMLNode::Text(b.to_string())),
        Value::Object(map) => {
            for (key, child_value) in map {
                if key == ATTRIBUTES_KEY {
                    set_attributes(elem, child_value)?;
                } else if key == TEXT_KEY {
                    elem.children.push(XMLNode::Text(scalar_text(child_value)?));
                } else if let Value::Array(items) = child_value {
                    for item in items {
                        if item.is_array() {
                            return Err(Error::JsonToXml(format!(
                                "nested array under `{key}` has no element name"
                            )));
                        }
                        let mut child = Element::new(key);
                        fill_element(&mut child, item)?;
                        elem.children.push(XMLNode::Element(child));
                    }
                } else {
                    let mut child = Element::new(key);
                    fill_element(&mut child, child_value)?;
                    elem.children.push(XMLNode::Element(child));
                }
            }
        }
        Value::Array(_) => {
            return Err(Error::JsonToXml(format!(
                "array directly inside element `{}` has no element name",
                elem.name
            )));
        }
    }
    Ok(())
}

fn set_attributes(elem: &mut Element, value: &Value) -> Result<()> {
    let attrs = value.as_object().ok_or_else(|| {
        Error::JsonToXml(format!("`{ATTRIBUTES_KEY}` must be an object of name/value pairs"))
    })?;
    for (attr_name, attr_value) in attrs {
        elem.attributes
            .insert(attr_name.clone(), scalar_text(attr_value)?);
    }
    Ok(())
}

fn scalar_text(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(Error::JsonToXml(format!(
            "expected a scalar, got {}",
            value_kind(other)
        ))),
    }
}

fn element_value(elem: &Element) -> Result<Value> {
    let child_elements: Vec<&Element> = elem
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .collect();
    let text = collect_text(elem);

    let mut map = Map::new();
    if !elem.attributes.is_empty() {
        let mut attrs = Map::new();
        for (name, value) in &elem.attributes {
            attrs.insert(name.clone(), Value::String(value.clone()));
        }
        map.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attrs));
    }

    if child_elements.is_empty() {
        let text_value = match text {
            Some(t) => Value::String(t),
            None => Value::Null,
        };
        if map.is_empty() {
            return Ok(text_value);
        }
        if !text_value.is_null() {
            map.insert(TEXT_KEY.to_string(), text_value);
        }
        return Ok(Value::Object(map));
    }

    // Mixed content keeps its text under the reserved key so nothing is
    // dropped.
    if let Some(t) = text {
        map.insert(TEXT_KEY.to_string(), Value::String(t));
    }

    for child in child_elements {
        check_name(&child.name)?;
        let value = element_value(child)?;
        match map.get_mut(&child.name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(child.name.clone(), value);
            }
        }
    }

    Ok(Value::Object(map))
}

fn check_name(name: &str) -> Result<()> {
    if name == ATTRIBUTES_KEY || name == TEXT_KEY {
        return Err(Error::XmlToJson(format!(
            "element name `{name}` collides with a reserved document key"
        )));
    }
    Ok(())
}

fn collect_text(elem: &Element) -> Option<String> {
    let text: String = elem
        .children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Text(t) => Some(t.as_str()),
            _ => None,
        })
        .collect();
    // Whitespace-only content is empty; anything else is kept verbatim,
    // surrounding whitespace included.
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
