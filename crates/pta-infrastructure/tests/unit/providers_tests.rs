//! Unit tests for provider wiring

use std::sync::Arc;

use pta_infrastructure::config::EmbeddingSettings;
use pta_infrastructure::providers::{build_embedding_provider, shared_embedding_provider};

fn null_settings() -> EmbeddingSettings {
    EmbeddingSettings {
        provider: "null".to_string(),
        model: None,
        cache_dir: None,
    }
}

#[test]
fn test_build_resolves_registered_provider() {
    let provider = build_embedding_provider(&null_settings()).unwrap();
    assert_eq!(provider.provider_name(), "null");
}

#[test]
fn test_build_rejects_unknown_provider() {
    let settings = EmbeddingSettings {
        provider: "no-such-provider".to_string(),
        model: None,
        cache_dir: None,
    };
    let err = build_embedding_provider(&settings).unwrap_err();
    assert!(err.to_string().contains("Unknown embedding provider"));
}

#[test]
fn test_shared_provider_is_constructed_once() {
    let first = shared_embedding_provider(&null_settings()).unwrap();
    let second = shared_embedding_provider(&null_settings()).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_build_returns_independent_instances() {
    let first = build_embedding_provider(&null_settings()).unwrap();
    let second = build_embedding_provider(&null_settings()).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}
