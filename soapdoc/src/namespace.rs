//! Target-namespace injection

use xmltree::Element;

/// Return a copy of `xml` with a default `xmlns` declaration set to `ns`
/// on the element's own tag.
///
/// The declaration is set on the element itself only; descendants are left
/// untouched (XML scoping makes them inherit it unless they override).
/// The input element is never mutated, so the same element can safely be
/// reused across header and body paths.
pub fn with_target_namespace(xml: &Element, ns: &str) -> Element {
    let mut out = xml.clone();
    out.attributes.insert("xmlns".to_string(), ns.to_string());
    out
}
