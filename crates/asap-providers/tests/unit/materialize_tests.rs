//! Tests for compiled package materialization

use std::sync::Arc;

use asap_domain::error::Error;
use asap_providers::FileArtifactStore;
use asap_providers::xslt::ArtifactMaterializer;

use crate::test_utils::MapArtifactStore;

const PACKAGE: &str = r#"{"N":"package","version":"30"}"#;

#[tokio::test]
async fn test_local_package_is_used_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ssp.sef.json");
    std::fs::write(&path, PACKAGE).unwrap();
    let cache = dir.path().join("cache");

    let materializer = ArtifactMaterializer::new(Arc::new(FileArtifactStore::new()), cache.clone());
    let artifact = materializer
        .materialize(path.to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(artifact.local_path, path);
    assert_eq!(artifact.digest.len(), 64);
    assert!(artifact.digest.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(!cache.exists());
}

#[tokio::test]
async fn test_remote_package_is_cached_by_digest() {
    let dir = tempfile::tempdir().unwrap();
    let location = "https://example.org/dist/rules/rev5/ssp.sef.json";
    let store = Arc::new(MapArtifactStore::with(location, PACKAGE));
    let materializer = ArtifactMaterializer::new(store, dir.path().to_path_buf());

    let first = materializer.materialize(location).await.unwrap();
    let second = materializer.materialize(location).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.location, location);
    assert_eq!(first.local_path.parent(), Some(dir.path()));
    assert_eq!(std::fs::read_to_string(&first.local_path).unwrap(), PACKAGE);
}

#[tokio::test]
async fn test_non_package_bytes_are_rejected() {
    let store = Arc::new(MapArtifactStore::with("rules/ssp.sef.json", "<xsl:stylesheet/>"));
    let materializer = ArtifactMaterializer::new(store, std::env::temp_dir());

    let err = materializer
        .materialize("rules/ssp.sef.json")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_missing_package_propagates_store_error() {
    let materializer =
        ArtifactMaterializer::new(Arc::new(MapArtifactStore::default()), std::env::temp_dir());

    let err = materializer.materialize("rules/sap.sef.json").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
}
