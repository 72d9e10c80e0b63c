//! Mission document parsing

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

use super::document::{MissionDocument, XmlElement, XmlNode};

/// Read and parse a mission XML file from disk.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, or a parse error if
/// the content is not well-formed XML.
pub fn read_mission<P: AsRef<Path>>(path: P) -> Result<MissionDocument> {
    let content = fs::read_to_string(path)?;
    parse_mission(&content)
}

/// Parse mission XML from a string.
///
/// Everything the parser sees is kept: declaration, comments, whitespace
/// runs, CDATA. Attribute values and text are stored unescaped.
///
/// # Errors
/// Returns [`Error::XmlError`] or [`Error::XmlAttrError`] for malformed
/// markup, and [`Error::MalformedDocument`] when an element is left open at
/// the end of input.
pub fn parse_mission(content: &str) -> Result<MissionDocument> {
    let mut reader = Reader::from_str(content);
    // Don't trim text - layout whitespace must survive the round trip
    reader.trim_text(false);

    let mut doc = MissionDocument::new();
    let mut buf = Vec::new();
    let mut element_stack: Vec<XmlElement> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                element_stack.push(open_element(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let mut element = open_element(&e)?;
                element.self_closing = true;
                attach(&mut doc, &mut element_stack, XmlNode::Element(element));
            }
            Ok(Event::End(_)) => {
                // quick-xml has already verified the end tag matches
                if let Some(completed) = element_stack.pop() {
                    attach(&mut doc, &mut element_stack, XmlNode::Element(completed));
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(Error::XmlError)?;
                attach(&mut doc, &mut element_stack, XmlNode::Text(text.into_owned()));
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                attach(&mut doc, &mut element_stack, XmlNode::CData(text));
            }
            Ok(Event::Comment(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                attach(&mut doc, &mut element_stack, XmlNode::Comment(text));
            }
            Ok(Event::Decl(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                attach(&mut doc, &mut element_stack, XmlNode::Declaration(text));
            }
            Ok(Event::PI(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                attach(
                    &mut doc,
                    &mut element_stack,
                    XmlNode::ProcessingInstruction(text),
                );
            }
            Ok(Event::DocType(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                attach(&mut doc, &mut element_stack, XmlNode::DocType(text));
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
        }
        buf.clear();
    }

    if let Some(unclosed) = element_stack.last() {
        return Err(Error::MalformedDocument(format!(
            "unclosed element <{}>",
            unclosed.name
        )));
    }

    Ok(doc)
}

fn open_element(tag: &BytesStart<'_>) -> Result<XmlElement> {
    let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);

    for attr in tag.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.insert(key, value);
    }

    Ok(element)
}

fn attach(doc: &mut MissionDocument, stack: &mut Vec<XmlElement>, node: XmlNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else {
        doc.nodes.push(node);
    }
}
