//! Shared reading and writing for the batch summarizers

use std::sync::Arc;

use asap_domain::error::{Error, Result};
use asap_domain::ports::ArtifactStore;
use asap_domain::{DocumentType, DocumentTypeMap};
use futures::future::try_join_all;
use serde::Serialize;

/// Read one source artifact per document type concurrently
///
/// Any read failure is reported as a summary generation error naming the
/// artifact.
pub(crate) async fn read_sources(
    store: &Arc<dyn ArtifactStore>,
    location: impl Fn(DocumentType) -> String,
) -> Result<DocumentTypeMap<(String, String)>> {
    let reads = DocumentType::ALL.into_iter().map(|document_type| {
        let location = location(document_type);
        async move {
            let text = read_source(store, &location).await?;
            Ok::<_, Error>((location, text))
        }
    });
    DocumentTypeMap::from_ordered(try_join_all(reads).await?)
}

/// Read one source artifact
pub(crate) async fn read_source(store: &Arc<dyn ArtifactStore>, location: &str) -> Result<String> {
    store
        .read_to_string(location)
        .await
        .map_err(|e| Error::summary_generation(location, e.to_string()))
}

/// Serialize a summary as pretty JSON with a trailing newline
pub(crate) fn render_json<T: Serialize + ?Sized>(artifact: &str, value: &T) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| Error::summary_generation(artifact, e.to_string()))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write rendered outputs, replacing prior versions
///
/// Callers render every output before calling this, so a parse failure
/// never leaves a partial set behind. Prior contents are captured first; if
/// any write fails, outputs already written are restored (or removed when
/// they did not exist) before the error is returned.
pub(crate) async fn write_outputs(
    store: &Arc<dyn ArtifactStore>,
    outputs: Vec<(String, Vec<u8>)>,
) -> Result<()> {
    let mut previous = Vec::with_capacity(outputs.len());
    for (location, _) in &outputs {
        match store.read(location).await {
            Ok(bytes) => previous.push(Some(bytes)),
            Err(Error::NotFound { .. }) => previous.push(None),
            Err(e) => return Err(Error::summary_generation(location, e.to_string())),
        }
    }

    for (written, (location, bytes)) in outputs.iter().enumerate() {
        if let Err(e) = store.write(location, bytes).await {
            restore(store, &outputs[..written], &previous).await;
            return Err(Error::summary_generation(location, e.to_string()));
        }
        tracing::info!(location = %location, bytes = bytes.len(), "summary written");
    }
    Ok(())
}

async fn restore(
    store: &Arc<dyn ArtifactStore>,
    written: &[(String, Vec<u8>)],
    previous: &[Option<Vec<u8>>],
) {
    for ((location, _), prior) in written.iter().zip(previous) {
        let restored = match prior {
            Some(bytes) => store.write(location, bytes).await,
            None => store.remove(location).await,
        };
        if let Err(e) = restored {
            tracing::warn!(location = %location, error = %e, "cannot restore prior summary");
        }
    }
}
