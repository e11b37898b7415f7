use proptest::prelude::*;
use vantage_env::{EnvironmentConfig, RawEnvironment, validate_env};

fn url_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["http", "https"]),
        "[a-z][a-z0-9]{0,11}\\.(com|org|dev)",
        prop::collection::vec("[a-z0-9]{1,8}", 0..3),
        any::<bool>(),
    )
        .prop_map(|(scheme, host, segments, trailing)| {
            let mut url = format!("{scheme}://{host}");
            for segment in segments {
                url.push('/');
                url.push_str(&segment);
            }
            if trailing {
                url.push('/');
            }
            url
        })
}

fn raw_from(urls: [String; 5], node_env: &str) -> RawEnvironment {
    let [api, bucket, service, base, cms] = urls;
    RawEnvironment {
        api_url: Some(api),
        asset_bucket_url: Some(bucket),
        asset_service_url: Some(service),
        base_url: Some(base),
        cms_url: Some(cms),
        node_env: Some(node_env.to_owned()),
        project_slug: Some("slug".to_owned()),
        session_cookie: Some("cookie".to_owned()),
    }
}

fn urls_of(config: &EnvironmentConfig) -> [String; 5] {
    [
        config.api_url.clone(),
        config.asset_bucket_url.clone(),
        config.asset_service_url.clone(),
        config.base_url.clone(),
        config.cms_url.clone(),
    ]
}

proptest! {
    #[test]
    fn normalized_output_is_stable(
        urls in prop::array::uniform5(url_strategy()),
        node_env in prop::sample::select(vec!["development", "staging", "production"]),
    ) {
        let first = validate_env(&raw_from(urls.clone(), node_env)).unwrap();

        for (input, output) in urls.iter().zip(urls_of(&first)) {
            prop_assert!(!output.ends_with('/'));
            prop_assert_eq!(input.trim_end_matches('/'), output.as_str());
        }

        let second = validate_env(&raw_from(urls_of(&first), node_env)).unwrap();
        prop_assert_eq!(first, second);
    }
}
