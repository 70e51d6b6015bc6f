//! Document Type Registry
//!
//! Holds the JSON-to-XML converter for every document type. The table is a
//! [`DocumentTypeMap`], so it cannot be built with a type missing.

use std::sync::Arc;

use asap_domain::error::{Error, Result};
use asap_domain::ports::JsonToXmlConverter;
use asap_domain::{DocumentType, DocumentTypeMap};

/// Converter capability per document type
#[derive(Debug, Clone)]
pub struct DocumentTypeRegistry {
    converters: DocumentTypeMap<Arc<dyn JsonToXmlConverter>>,
}

impl DocumentTypeRegistry {
    /// Build a registry, checking every converter serves its slot
    pub fn new(converters: DocumentTypeMap<Arc<dyn JsonToXmlConverter>>) -> Result<Self> {
        for (document_type, converter) in converters.iter() {
            if converter.document_type() != document_type {
                return Err(Error::internal(format!(
                    "converter '{}' for {} registered under {document_type}",
                    converter.provider_name(),
                    converter.document_type()
                )));
            }
        }
        Ok(Self { converters })
    }

    /// Build a registry by creating one converter per document type
    pub fn try_from_fn(
        mut create: impl FnMut(DocumentType) -> Result<Arc<dyn JsonToXmlConverter>>,
    ) -> Result<Self> {
        let converters = DocumentType::ALL
            .into_iter()
            .map(&mut create)
            .collect::<Result<Vec<_>>>()?;
        Self::new(DocumentTypeMap::from_ordered(converters)?)
    }

    /// Converter for a document type
    pub fn converter(&self, document_type: DocumentType) -> &Arc<dyn JsonToXmlConverter> {
        self.converters.get(document_type)
    }

    /// Converter for a document type tag
    ///
    /// Fails with `Error::UnsupportedDocumentType` for unknown tags.
    pub fn resolve(&self, tag: &str) -> Result<&Arc<dyn JsonToXmlConverter>> {
        let document_type: DocumentType = tag.parse()?;
        Ok(self.converter(document_type))
    }
}
