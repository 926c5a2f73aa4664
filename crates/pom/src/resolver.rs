use crate::document::XmlElement;

/// Resolve a value that may be a `${name}` property reference against the
/// descriptor's properties element.
///
/// Resolution never fails: an unresolvable reference (no properties
/// element, or no matching property) comes back verbatim, and resolution
/// is single-hop: a property whose value is itself a reference stays
/// partially resolved.
pub fn resolve_property(value: Option<&str>, properties: Option<&XmlElement>) -> Option<String> {
    let value = value?;

    if let Some(name) = value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
    {
        if let Some(text) = properties
            .and_then(|props| props.find_child(name))
            .and_then(XmlElement::text)
        {
            return Some(text);
        }
    }

    Some(value.to_string())
}
