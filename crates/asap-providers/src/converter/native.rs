//! Native JSON-to-XML Converter
//!
//! Implements the OSCAL JSON/XML correspondence directly:
//!
//! - flag members (identifiers, names, references) become attributes
//! - arrays become repeated elements named for one member (`props` → `prop`)
//! - markup-multiline members (`description`, `remarks`) become paragraphs
//! - everything else becomes a child element, in member order
//!
//! Members are emitted in JSON order rather than reordered to the XML
//! schema's sequence.

use std::sync::Arc;

use asap_application::ports::registry::{
    CONVERTER_PROVIDERS, ConverterProviderConfig, ConverterProviderEntry,
};
use asap_domain::constants::OSCAL_NAMESPACE;
use asap_domain::error::{Error, Result};
use asap_domain::ports::JsonToXmlConverter;
use asap_domain::value_objects::{DocumentType, StructuralDocument};
use async_trait::async_trait;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::{Map, Value};

/// Members every OSCAL document model requires
const REQUIRED_COMMON: &[&str] = &["uuid", "metadata"];

/// Flag members written as attributes
const FLAG_MEMBERS: &[&str] = &[
    "uuid",
    "id",
    "name",
    "ns",
    "class",
    "value",
    "href",
    "rel",
    "media-type",
    "type",
    "system",
    "algorithm",
    "scheme",
];

/// Members holding markup-multiline prose
const MULTILINE_MEMBERS: &[&str] = &["description", "remarks"];

/// Group names whose element name is not the plain singular
const IRREGULAR_SINGULARS: &[(&str, &str)] = &[
    ("addresses", "address"),
    ("email-addresses", "email-address"),
    ("functions-performed", "function-performed"),
    ("hashes", "hash"),
    ("remediations", "response"),
    ("statuses", "status"),
];

fn required_members(document_type: DocumentType) -> &'static [&'static str] {
    match document_type {
        DocumentType::Ssp => &[
            "import-profile",
            "system-characteristics",
            "system-implementation",
            "control-implementation",
        ],
        DocumentType::Sap => &["import-ssp", "reviewed-controls"],
        DocumentType::Sar => &["import-ap", "results"],
        DocumentType::Poam => &["poam-items"],
    }
}

fn is_flag(key: &str) -> bool {
    FLAG_MEMBERS.contains(&key) || key.ends_with("-uuid") || key.ends_with("-id")
}

/// Element name for one member of an array group
pub fn singular(group: &str) -> String {
    if let Some((_, element)) = IRREGULAR_SINGULARS.iter().find(|(g, _)| *g == group) {
        return (*element).to_string();
    }
    if let Some(stem) = group.strip_suffix("ies") {
        return format!("{stem}y");
    }
    group.strip_suffix('s').unwrap_or(group).to_string()
}

/// Whether a member name can stand as an unprefixed XML element or attribute name
fn is_xml_name(name: &str) -> bool {
    let wide = |c: char| c >= '\u{C0}' && !matches!(c, '\u{D7}' | '\u{F7}');
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| {
            first.is_ascii_alphabetic() || first == '_' || (wide(first) && first.is_alphabetic())
        })
        && chars.all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '-' | '.' | '_' | '\u{B7}')
                || (wide(c) && c.is_alphanumeric())
        })
}

/// Characters allowed in XML 1.0 content
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Converter implementing the OSCAL JSON/XML mapping in-process
#[derive(Debug, Clone, Copy)]
pub struct NativeJsonToXmlConverter {
    document_type: DocumentType,
}

impl NativeJsonToXmlConverter {
    /// Create a converter for a document type
    pub fn new(document_type: DocumentType) -> Self {
        Self { document_type }
    }

    fn check_required(&self, body: &Map<String, Value>) -> Result<()> {
        let missing = REQUIRED_COMMON
            .iter()
            .chain(required_members(self.document_type))
            .find(|member| !body.contains_key(**member));
        match missing {
            Some(member) => Err(Error::conversion(
                self.document_type,
                format!("missing required member '{member}'"),
            )),
            None => Ok(()),
        }
    }
}

struct XmlBuilder {
    document_type: DocumentType,
    writer: Writer<Vec<u8>>,
}

impl XmlBuilder {
    fn new(document_type: DocumentType) -> Self {
        Self {
            document_type,
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn check_name<'n>(&self, name: &'n str) -> Result<&'n str> {
        if is_xml_name(name) {
            Ok(name)
        } else {
            Err(Error::conversion(
                self.document_type,
                format!("member name '{name}' is not a valid XML name"),
            ))
        }
    }

    fn check_text<'t>(&self, name: &str, text: &'t str) -> Result<&'t str> {
        match text.chars().find(|c| !is_xml_char(*c)) {
            None => Ok(text),
            Some(c) => Err(Error::conversion(
                self.document_type,
                format!("member '{name}' contains a character not allowed in XML: {c:?}"),
            )),
        }
    }

    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| Error::internal(format!("cannot write converted XML: {e}")))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        let text = self.check_text(name, text)?;
        self.emit(Event::Start(BytesStart::new(name)))?;
        self.emit(Event::Text(BytesText::new(text)))?;
        self.emit(Event::End(BytesEnd::new(name)))
    }

    fn multiline(&mut self, name: &str, text: &str) -> Result<()> {
        let name = self.check_name(name)?;
        self.emit(Event::Start(BytesStart::new(name)))?;
        for paragraph in text.split("\n\n") {
            let paragraph = paragraph.split_whitespace().collect::<Vec<_>>().join(" ");
            if !paragraph.is_empty() {
                self.text_element("p", &paragraph)?;
            }
        }
        self.emit(Event::End(BytesEnd::new(name)))
    }

    fn value(&mut self, name: &str, value: &Value) -> Result<()> {
        match value {
            Value::Null => Ok(()),
            Value::Object(members) => self.object(name, members, None),
            Value::Array(items) => {
                let element = singular(self.check_name(name)?);
                items.iter().try_for_each(|item| self.value(&element, item))
            }
            Value::String(text) if MULTILINE_MEMBERS.contains(&name) => self.multiline(name, text),
            scalar => match scalar_text(scalar) {
                Some(text) => {
                    let name = self.check_name(name)?;
                    self.text_element(name, &text)
                }
                None => Ok(()),
            },
        }
    }

    fn object(
        &mut self,
        name: &str,
        members: &Map<String, Value>,
        namespace: Option<&str>,
    ) -> Result<()> {
        let name = self.check_name(name)?;
        let mut start = BytesStart::new(name);
        if let Some(namespace) = namespace {
            start.push_attribute(("xmlns", namespace));
        }
        let mut children = Vec::new();
        for (key, value) in members {
            if key == "$schema" {
                continue;
            }
            match scalar_text(value) {
                Some(text) if is_flag(key) => {
                    let key = self.check_name(key)?;
                    start.push_attribute((key, self.check_text(key, &text)?));
                }
                _ if value.is_null() => {}
                _ if value.as_array().is_some_and(Vec::is_empty) => {}
                _ => children.push((key, value)),
            }
        }

        if children.is_empty() {
            return self.emit(Event::Empty(start));
        }
        self.emit(Event::Start(start))?;
        for (key, value) in children {
            self.value(key, value)?;
        }
        self.emit(Event::End(BytesEnd::new(name)))
    }

    fn finish(self) -> Result<String> {
        Ok(String::from_utf8(self.writer.into_inner())?)
    }
}

#[async_trait]
impl JsonToXmlConverter for NativeJsonToXmlConverter {
    fn document_type(&self) -> DocumentType {
        self.document_type
    }

    async fn convert(&self, json: &str) -> Result<StructuralDocument> {
        let root = self.document_type.root_element();
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::conversion(self.document_type, format!("invalid JSON: {e}")))?;
        let body = value
            .get(root)
            .ok_or_else(|| {
                Error::conversion(self.document_type, format!("missing root member '{root}'"))
            })?
            .as_object()
            .ok_or_else(|| {
                Error::conversion(self.document_type, format!("root member '{root}' is not an object"))
            })?;
        self.check_required(body)?;

        let mut builder = XmlBuilder::new(self.document_type);
        builder.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        builder.object(root, body, Some(OSCAL_NAMESPACE))?;
        let xml = builder.finish()?;
        tracing::debug!(document_type = %self.document_type, bytes = xml.len(), "document converted");
        Ok(StructuralDocument::new(self.document_type, xml))
    }

    fn provider_name(&self) -> &str {
        "native"
    }
}

#[linkme::distributed_slice(CONVERTER_PROVIDERS)]
static NATIVE_CONVERTER: ConverterProviderEntry = ConverterProviderEntry {
    name: "native",
    description: "Built-in OSCAL JSON-to-XML conversion",
    factory: |config: &ConverterProviderConfig| {
        Ok(Arc::new(NativeJsonToXmlConverter::new(config.document_type)))
    },
};
