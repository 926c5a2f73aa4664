use std::io::Cursor;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::PomError;

/// Default namespace of a Maven build descriptor.
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

/// One node in the descriptor tree. Text and CDATA carry unescaped
/// content; comments carry their raw interior.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    CData(String),
    Comment(String),
}

/// A mutable element with its attributes and children, stored with the
/// name as written (prefix included) so write-back stays faithful.
///
/// All lookups go by local name; the descriptor schema lives in a single
/// fixed namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element name with any namespace prefix stripped.
    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First child element with the given local name.
    pub fn find_child(&self, local_name: &str) -> Option<&XmlElement> {
        self.find_all(local_name).next()
    }

    pub fn find_child_mut(&mut self, local_name: &str) -> Option<&mut XmlElement> {
        self.find_all_mut(local_name).next()
    }

    /// All child elements with the given local name, in document order.
    pub fn find_all<'e>(&'e self, local_name: &str) -> impl Iterator<Item = &'e XmlElement> {
        self.children.iter().filter_map(move |child| match child {
            XmlNode::Element(element) if element.local_name() == local_name => Some(element),
            _ => None,
        })
    }

    pub fn find_all_mut<'e>(
        &'e mut self,
        local_name: &str,
    ) -> impl Iterator<Item = &'e mut XmlElement> {
        self.children.iter_mut().filter_map(move |child| match child {
            XmlNode::Element(element) if element.local_name() == local_name => Some(element),
            _ => None,
        })
    }

    /// Trimmed text content, `None` when the element holds no text.
    pub fn text(&self) -> Option<String> {
        let mut out = String::new();
        for child in &self.children {
            match child {
                XmlNode::Text(text) | XmlNode::CData(text) => out.push_str(text),
                _ => {}
            }
        }
        let trimmed = out.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Replace the element's text content, leaving element and comment
    /// children in place.
    pub fn set_text(&mut self, value: &str) {
        self.children
            .retain(|child| matches!(child, XmlNode::Element(_) | XmlNode::Comment(_)));
        self.children.insert(0, XmlNode::Text(value.to_string()));
    }
}

/// An in-memory, mutable build descriptor. Owned by one service instance
/// and not shared.
#[derive(Debug, Clone)]
pub struct PomDocument {
    root: XmlElement,
}

impl PomDocument {
    /// Parse descriptor content into a tree. Whitespace-only text nodes
    /// are kept so serialization preserves the original indentation.
    pub fn parse(content: &str) -> Result<Self, PomError> {
        let mut reader = Reader::from_str(content);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    stack.push(element_from_start(&e)?);
                }
                Ok(Event::Empty(e)) => {
                    let element = element_from_start(&e)?;
                    close_element(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| PomError::Parse("unexpected closing tag".to_string()))?;
                    close_element(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e.decode().map_err(parse_err)?.into_owned();
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::Text(text));
                    }
                }
                Ok(Event::CData(e)) => {
                    let data = String::from_utf8_lossy(e.as_ref()).into_owned();
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::CData(data));
                    }
                }
                Ok(Event::Comment(e)) => {
                    let comment = String::from_utf8_lossy(e.as_ref()).into_owned();
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::Comment(comment));
                    }
                }
                Ok(Event::GeneralRef(e)) => {
                    let name = String::from_utf8_lossy(&e).into_owned();
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::Text(resolve_entity(&name)));
                    }
                }
                // Prolog events are not modeled; serialization emits its
                // own declaration header.
                Ok(Event::Decl(_)) | Ok(Event::PI(_)) | Ok(Event::DocType(_)) => {}
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(PomError::Parse(e.to_string())),
            }
        }

        if !stack.is_empty() {
            return Err(PomError::Parse("unclosed element".to_string()));
        }
        root.ok_or(PomError::NoRoot).map(|root| Self { root })
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut XmlElement {
        &mut self.root
    }

    /// The root's default namespace declaration, normally [`POM_NAMESPACE`].
    pub fn namespace(&self) -> Option<&str> {
        self.root.attribute("xmlns")
    }

    /// Serialize with an XML declaration header. Root attributes (the
    /// namespace declaration included) are written back verbatim.
    pub fn to_xml(&self) -> Result<String, PomError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(serialize_err)?;
        writer
            .write_event(Event::Text(BytesText::from_escaped("\n")))
            .map_err(serialize_err)?;
        write_element(&mut writer, &self.root)?;

        let bytes = writer.into_inner().into_inner();
        String::from_utf8(bytes).map_err(serialize_err)
    }
}

fn element_from_start(e: &BytesStart) -> Result<XmlElement, PomError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(parse_err)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(parse_err)?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn close_element(
    stack: &mut Vec<XmlElement>,
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), PomError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None => {
            if root.is_some() {
                return Err(PomError::Parse("multiple root elements".to_string()));
            }
            *root = Some(element);
        }
    }
    Ok(())
}

fn write_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    element: &XmlElement,
) -> Result<(), PomError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(serialize_err);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(serialize_err)?;
    for child in &element.children {
        match child {
            XmlNode::Element(nested) => write_element(writer, nested)?,
            XmlNode::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(serialize_err)?,
            XmlNode::CData(data) => writer
                .write_event(Event::CData(BytesCData::new(data.as_str())))
                .map_err(serialize_err)?,
            XmlNode::Comment(comment) => writer
                .write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))
                .map_err(serialize_err)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(serialize_err)
}

/// Resolve a general entity reference to its text. Predefined and
/// character references become their literal value; anything else stays
/// as written (descriptors do not declare custom entities).
fn resolve_entity(name: &str) -> String {
    match name {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "apos" => "'".to_string(),
        "quot" => "\"".to_string(),
        _ => {
            let code = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| name.strip_prefix('#').and_then(|dec| dec.parse().ok()));
            match code.and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => format!("&{name};"),
            }
        }
    }
}

fn parse_err<E: std::fmt::Display>(err: E) -> PomError {
    PomError::Parse(err.to_string())
}

fn serialize_err<E: std::fmt::Display>(err: E) -> PomError {
    PomError::Serialize(err.to_string())
}
