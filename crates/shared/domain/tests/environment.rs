use serde_json::json;
use std::str::FromStr;
use vantage_domain::environment::{
    EnvironmentConfig, EnvironmentConfigInner, NodeEnv, RawEnvironment,
};

#[test]
fn node_env_parses_exact_lowercase_names() {
    assert_eq!(NodeEnv::from_str("development"), Ok(NodeEnv::Development));
    assert_eq!(NodeEnv::from_str("staging"), Ok(NodeEnv::Staging));
    assert_eq!(NodeEnv::from_str("production"), Ok(NodeEnv::Production));
    assert!(NodeEnv::from_str("Production").is_err());
    assert!(NodeEnv::from_str("qa").is_err());
    assert_eq!(NodeEnv::Staging.to_string(), "staging");
}

#[test]
fn raw_environment_accepts_both_key_spellings() {
    let upper: RawEnvironment =
        serde_json::from_value(json!({ "API_URL": "https://api.test", "NODE_ENV": "staging" }))
            .expect("upper-case keys");
    let lower: RawEnvironment =
        serde_json::from_value(json!({ "api_url": "https://api.test", "node_env": "staging" }))
            .expect("lower-case keys");

    assert_eq!(upper, lower);
    assert_eq!(upper.api_url.as_deref(), Some("https://api.test"));
    assert!(upper.cms_url.is_none());
}

#[test]
fn url_inputs_are_listed_in_validation_order() {
    let raw = RawEnvironment { base_url: Some("http://localhost:3000".to_owned()), ..Default::default() };
    let keys: Vec<_> = raw.urls().iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, ["API_URL", "ASSET_BUCKET_URL", "ASSET_SERVICE_URL", "BASE_URL", "CMS_URL"]);
    assert_eq!(raw.urls()[3].1, Some("http://localhost:3000"));
}

#[test]
fn config_serializes_with_camel_cased_url_names() {
    let config = EnvironmentConfig::new(EnvironmentConfigInner {
        api_url: "https://api.test".to_owned(),
        asset_bucket_url: "https://bucket.test".to_owned(),
        asset_service_url: "https://assets.test".to_owned(),
        base_url: "http://localhost:3000".to_owned(),
        cms_url: "https://cms.test".to_owned(),
        is_development: true,
        is_localhost: true,
        is_production: false,
        project_slug: "demo".to_owned(),
        session_cookie: "sid".to_owned(),
    });

    let value = serde_json::to_value(&config).expect("serialize");
    assert_eq!(value["apiURL"], "https://api.test");
    assert_eq!(value["assetServiceURL"], "https://assets.test");
    assert_eq!(value["isLocalhost"], true);
    assert_eq!(value["sessionCookie"], "sid");

    let cloned = config.clone();
    assert_eq!(cloned.project_slug, "demo");
    assert_eq!(cloned, config);
}
