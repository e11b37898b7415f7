use std::sync::Arc;
use vantage::breakpoints::{BreakpointObserver, MemoryStore, MemoryViewport};
use vantage::env::EnvLoader;

#[test]
fn core_features_are_always_enabled() {
    assert!(vantage::features::is_enabled("breakpoints"));
    assert!(vantage::features::is_enabled("env"));
    assert!(!vantage::features::is_enabled("server"));
}

#[test]
fn facade_exposes_both_components() {
    let store = Arc::new(MemoryStore::new());
    let observer = BreakpointObserver::new(MemoryViewport::new(), Arc::clone(&store));
    observer.observe();
    assert_eq!(store.commit_count(), 2);

    let config = EnvLoader::new()
        .vars([
            ("API_URL", "https://api.example.com"),
            ("ASSET_BUCKET_URL", "https://bucket.example.com"),
            ("ASSET_SERVICE_URL", "https://assets.example.com"),
            ("BASE_URL", "https://www.example.com/"),
            ("CMS_URL", "https://cms.example.com"),
            ("NODE_ENV", "production"),
            ("PROJECT_SLUG", "site"),
            ("SESSION_COOKIE", "sid"),
        ])
        .load()
        .expect("valid environment");
    assert_eq!(config.base_url, "https://www.example.com");
    assert!(config.is_production);
}
