//! JSON-to-XML Converter Port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{DocumentType, StructuralDocument};

/// Converts an object-serialized OSCAL document into structural markup
///
/// One instance serves one document type. A document that does not conform
/// to the model (for example, a missing required member) fails with
/// `Error::Conversion` carrying the transform diagnostic.
#[async_trait]
pub trait JsonToXmlConverter: Send + Sync + std::fmt::Debug {
    /// Document type this converter handles
    fn document_type(&self) -> DocumentType;

    /// Convert JSON text to a structural document
    async fn convert(&self, json: &str) -> Result<StructuralDocument>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
