//! XML Pretty-Printing and document parsing

use asap_domain::error::{Error, Result};
use quick_xml::Writer;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// Indentation width of formatted output
const INDENT_WIDTH: usize = 2;

/// Parse a document into a read-only tree
///
/// A DOCTYPE declaration is accepted; internal entities it declares are
/// expanded.
pub fn parse_document(
    xml: &str,
) -> std::result::Result<roxmltree::Document<'_>, roxmltree::Error> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    roxmltree::Document::parse_with_options(xml, options)
}

/// Re-indent an XML document or fragment
///
/// Whitespace-only text between elements is dropped and each element is
/// placed on its own line. Fragments with several top-level elements are
/// accepted.
pub fn format_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => writer
                .write_event(event)
                .map_err(|e| Error::xml(format!("cannot write formatted XML: {e}")))?,
            Err(e) => {
                return Err(Error::xml(format!(
                    "malformed XML at position {}: {e}",
                    reader.error_position()
                )));
            }
        }
    }

    Ok(String::from_utf8(writer.into_inner())?)
}
