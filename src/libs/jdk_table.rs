//! Editing of an IDE's interpreter table (`options/jdk.table.xml`).
//!
//! The document is streamed event by event with `quick-xml`. Every event is
//! written back untouched except at one point: right before the closing tag of
//! the first `component` child of the root element, a new `jdk` entry is emitted:
//!
//! ```xml
//! <jdk version="2">
//!   <name value="..."/><version value="..."/><homePath value="..."/><type value="..."/>
//!   <roots/>
//! </jdk>
//! ```
//!
//! (written without the whitespace shown here). Existing entries are never read
//! or changed, and nothing is written to disk.

use crate::errors::{JetsetterError, Result};
use crate::log_debug;
use crate::schemas::interpreter::InterpreterRecord;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Schema version of the `jdk` element itself, unrelated to the interpreter version.
pub const JDK_ENTRY_VERSION: &str = "2";

const COMPONENT_TAG: &[u8] = b"component";

/// Byte order mark some editors put in front of UTF-8 files.
const UTF8_BOM: &str = "\u{feff}";

/// Reads the interpreter table at `xml_path` and returns its text with `record` appended.
pub fn add_interpreter_to_table(xml_path: &Path, record: &InterpreterRecord) -> Result<String> {
    let content = fs::read_to_string(xml_path)
        .map_err(|e| JetsetterError::io(format!("Failed to read {}", xml_path.display()), e))?;
    insert_jdk_entry(&content, &record.fields(), xml_path)
}

/// Appends a `jdk` entry built from `fields` to the first top-level `component` of `xml`.
///
/// `source` is only used in error messages. A leading byte order mark is kept.
///
/// # Errors
/// * `MissingComponent` if the root element has no `component` child.
/// * `MalformedXml` if the document does not parse, has no root or more than one,
///   or ends with elements still open.
pub fn insert_jdk_entry(xml: &str, fields: &[(&str, &str)], source: &Path) -> Result<String> {
    let malformed = |reason: String| JetsetterError::MalformedXml {
        path: source.to_path_buf(),
        reason,
    };
    let xml_error = |e: quick_xml::Error| malformed(e.to_string());

    let (bom, body) = match xml.strip_prefix(UTF8_BOM) {
        Some(rest) => (UTF8_BOM, rest),
        None => ("", xml),
    };

    let mut reader = Reader::from_str(body);
    let mut writer = Writer::new(Vec::with_capacity(xml.len() + 256));
    // Depth of the element currently open; the root element sits at depth 1.
    let mut depth = 0usize;
    let mut root_seen = false;
    let mut in_component = false;
    let mut inserted = false;

    loop {
        let event = reader.read_event().map_err(xml_error)?;

        // Only one root element, and nothing but whitespace outside it.
        if depth == 0 {
            match &event {
                Event::Start(_) | Event::Empty(_) if root_seen => {
                    return Err(malformed("more than one root element".to_string()));
                }
                Event::Start(_) | Event::Empty(_) => root_seen = true,
                Event::Text(text) if !text.iter().all(u8::is_ascii_whitespace) => {
                    return Err(malformed("text outside the root element".to_string()));
                }
                _ => {}
            }
        }

        match event {
            Event::Start(e) => {
                if depth == 1 && !inserted && is_component(&e) {
                    log_debug!("[JdkTable] Found component at byte {}", reader.buffer_position());
                    in_component = true;
                }
                depth += 1;
                writer.write_event(Event::Start(e)).map_err(xml_error)?;
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                if in_component && depth == 1 {
                    write_jdk_entry(&mut writer, fields).map_err(xml_error)?;
                    in_component = false;
                    inserted = true;
                }
                writer.write_event(Event::End(e)).map_err(xml_error)?;
            }
            Event::Empty(e) if depth == 1 && !inserted && is_component(&e) => {
                // `<component/>` has no room for children; reopen it.
                let start = reopened(&e).map_err(xml_error)?;
                let end = start.to_end().into_owned();
                writer.write_event(Event::Start(start)).map_err(xml_error)?;
                write_jdk_entry(&mut writer, fields).map_err(xml_error)?;
                writer.write_event(Event::End(end)).map_err(xml_error)?;
                inserted = true;
            }
            Event::Eof => break,
            other => writer.write_event(other).map_err(xml_error)?,
        }
    }

    if !root_seen {
        return Err(malformed("no root element".to_string()));
    }
    if depth != 0 {
        return Err(malformed(format!(
            "document ends with {depth} element(s) still open"
        )));
    }
    if !inserted {
        return Err(JetsetterError::MissingComponent(source.to_path_buf()));
    }

    let body = String::from_utf8(writer.into_inner()).map_err(|e| {
        JetsetterError::io(
            format!("Failed to serialize {}", source.display()),
            io::Error::new(io::ErrorKind::InvalidData, e),
        )
    })?;
    Ok(format!("{bom}{body}"))
}

fn is_component(element: &BytesStart<'_>) -> bool {
    element.name().as_ref() == COMPONENT_TAG
}

/// Rebuilds a self-closing element as an opening tag with the same attributes.
fn reopened(element: &BytesStart<'_>) -> quick_xml::Result<BytesStart<'static>> {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    let mut start = BytesStart::new(name);
    for attribute in element.attributes() {
        start.push_attribute(attribute?);
    }
    Ok(start)
}

/// Writes `<jdk version="2">`, one `<tag value="..."/>` per field, then `<roots/>`.
/// Attribute values are escaped by quick-xml.
fn write_jdk_entry<W: Write>(writer: &mut Writer<W>, fields: &[(&str, &str)]) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(
        BytesStart::new("jdk").with_attributes([("version", JDK_ENTRY_VERSION)]),
    ))?;
    for (tag, value) in fields {
        writer.write_event(Event::Empty(
            BytesStart::new(*tag).with_attributes([("value", *value)]),
        ))?;
    }
    // Filled in by the IDE the next time it starts.
    writer.write_event(Event::Empty(BytesStart::new("roots")))?;
    writer.write_event(Event::End(BytesEnd::new("jdk")))?;
    Ok(())
}
