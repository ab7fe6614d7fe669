//! # XML Rendering
//!
//! Serializes an audit tree through `quick_xml::Writer`.
//!
//! Text and attribute values may hold arbitrary engine messages. Characters
//! outside the XML 1.0 `Char` production are written as U+FFFD so that every
//! rendered report stays well-formed.

use super::audit::{AuditElement, AuditNode, RenderOptions};
use super::errors::ReportError;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::io;

pub(crate) fn render_document(
    root: &AuditElement,
    options: &RenderOptions,
) -> Result<String, ReportError> {
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
        None => Writer::new(Vec::new()),
    };
    if options.xml_declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(render_error)?;
    }
    write_element(&mut writer, root).map_err(render_error)?;

    let mut bytes = writer.into_inner();
    if options.indent.is_some() {
        bytes.push(b'\n');
    }
    String::from_utf8(bytes).map_err(|e| ReportError::Render(e.to_string()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &AuditElement) -> io::Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), xml_chars(value).as_ref()));
    }
    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start));
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            AuditNode::Text(text) => {
                let text = xml_chars(text);
                let escaped = partial_escape(text.as_ref());
                writer.write_event(Event::Text(BytesText::from_escaped(escaped)))?;
            }
            AuditNode::Element(nested) => write_element(writer, nested)?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))
}

fn render_error(error: io::Error) -> ReportError {
    ReportError::Render(error.to_string())
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

fn xml_chars(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(
            s.chars()
                .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
                .collect(),
        )
    }
}
