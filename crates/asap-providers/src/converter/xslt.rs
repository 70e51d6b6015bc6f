//! External-Processor Converter
//!
//! Runs the compiled OSCAL `json-to-xml` converter for one document type.
//! The package is materialized on first use and reused for the session.

use std::sync::Arc;

use asap_application::ports::registry::{
    CONVERTER_PROVIDERS, ConverterProviderConfig, ConverterProviderEntry,
};
use asap_domain::error::{Error, Result};
use asap_domain::ports::JsonToXmlConverter;
use asap_domain::value_objects::{ArtifactLayout, DocumentType, StructuralDocument};
use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::artifact_store::LocationArtifactStore;
use crate::constants::{CONVERTER_FILE_PARAM, CONVERTER_INITIAL_TEMPLATE, DEFAULT_XSLT_COMMAND};
use crate::xslt::{ArtifactMaterializer, MaterializedArtifact, XsltProcessor, default_cache_dir};

/// Converter backed by the compiled OSCAL converter stylesheet
#[derive(Debug)]
pub struct XsltJsonToXmlConverter {
    document_type: DocumentType,
    processor: XsltProcessor,
    materializer: ArtifactMaterializer,
    location: String,
    package: OnceCell<MaterializedArtifact>,
}

impl XsltJsonToXmlConverter {
    /// Create a converter reading its package from `location`
    pub fn new(
        document_type: DocumentType,
        processor: XsltProcessor,
        materializer: ArtifactMaterializer,
        location: impl Into<String>,
    ) -> Self {
        Self {
            document_type,
            processor,
            materializer,
            location: location.into(),
            package: OnceCell::new(),
        }
    }

    /// Create a converter from registry configuration
    pub fn from_config(config: &ConverterProviderConfig) -> std::result::Result<Self, String> {
        if config.base_location.trim().is_empty() {
            return Err("xslt converter requires an artifact base location".to_string());
        }
        let command = config
            .command
            .clone()
            .unwrap_or_else(|| DEFAULT_XSLT_COMMAND.to_string());
        let store = config
            .store
            .clone()
            .unwrap_or_else(|| Arc::new(LocationArtifactStore::new()));
        let cache_dir = config.cache_dir.clone().unwrap_or_else(default_cache_dir);
        let layout = ArtifactLayout::new(config.base_location.clone());
        Ok(Self::new(
            config.document_type,
            XsltProcessor::new(command, config.args.clone()),
            ArtifactMaterializer::new(store, cache_dir),
            layout.converter_artifact(config.document_type),
        ))
    }

    /// Location of the compiled converter package
    pub fn location(&self) -> &str {
        &self.location
    }

    async fn package(&self) -> Result<&MaterializedArtifact> {
        self.package
            .get_or_try_init(|| async {
                let package = self.materializer.materialize(&self.location).await?;
                tracing::info!(
                    document_type = %self.document_type,
                    location = %package.location,
                    digest = %package.digest,
                    "converter loaded"
                );
                Ok(package)
            })
            .await
    }
}

#[async_trait]
impl JsonToXmlConverter for XsltJsonToXmlConverter {
    fn document_type(&self) -> DocumentType {
        self.document_type
    }

    async fn convert(&self, json: &str) -> Result<StructuralDocument> {
        let package = self.package().await?;

        let input = tempfile::Builder::new()
            .prefix("asap-")
            .suffix(".json")
            .tempfile()
            .map_err(|e| Error::io_with_source("cannot create conversion input", e))?;
        tokio::fs::write(input.path(), json.as_bytes())
            .await
            .map_err(|e| Error::io_with_source("cannot write conversion input", e))?;

        let args = vec![
            format!("-sef:{}", package.local_path.display()),
            format!("-it:{CONVERTER_INITIAL_TEMPLATE}"),
            format!("{CONVERTER_FILE_PARAM}={}", input.path().display()),
        ];
        let output = self.processor.run(&args).await?;
        if !output.success {
            return Err(Error::conversion(self.document_type, output.diagnostic()));
        }
        Ok(StructuralDocument::new(
            self.document_type,
            String::from_utf8(output.stdout)?,
        ))
    }

    fn provider_name(&self) -> &str {
        "xslt"
    }
}

#[linkme::distributed_slice(CONVERTER_PROVIDERS)]
static XSLT_CONVERTER: ConverterProviderEntry = ConverterProviderEntry {
    name: "xslt",
    description: "Compiled OSCAL converter stylesheet run by an external XSLT 3.0 processor",
    factory: |config: &ConverterProviderConfig| {
        Ok(Arc::new(XsltJsonToXmlConverter::from_config(config)?))
    },
};
