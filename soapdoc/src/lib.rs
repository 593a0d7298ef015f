//! # soapdoc - JSON document / XML element-tree transcoding
//!
//! Converts between a JSON-shaped document (a [`serde_json::Value`] with
//! insertion-ordered keys) and an XML element tree ([`xmltree::Element`]),
//! in both directions, plus the target-namespace injection used when
//! addressing a SOAP service schema.
//!
//! ## Conventions
//!
//! - Object keys become child elements, array entries become repeated
//!   sibling elements sharing the array's key name, scalars become text
//!   content, `null` becomes an empty element.
//! - Going back, repeated same-named siblings collapse into an array and
//!   every text leaf is a string (XML carries no numeric type information).
//! - XML attributes live in the document under the reserved
//!   [`ATTRIBUTES_KEY`] object; text content of an element that also
//!   carries attributes lives under [`TEXT_KEY`].
//!
//! The array collapsing is lossy for arrays of exactly one element: a lone
//! `<Item>` and `["Item"]` of length one produce the same XML. This is an
//! inherent property of the convention, matching the behavior of the
//! services this crate talks to.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({"Ping": {"Message": "hello"}});
//! let elem = soapdoc::document_to_xml(&doc).unwrap();
//! assert_eq!(elem.name, "Ping");
//!
//! let back = soapdoc::xml_to_document(&elem).unwrap();
//! assert_eq!(back, doc);
//! ```

mod error;
mod namespace;
mod transcode;

pub use error::{Error, Result};
pub use namespace::with_target_namespace;
pub use transcode::{
    ATTRIBUTES_KEY, TEXT_KEY, document_from_str, document_to_xml, element_to_string,
    parse_element, xml_to_document,
};
