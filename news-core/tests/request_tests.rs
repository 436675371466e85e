use news_core::{SearchRequest, DEFAULT_ENDPOINT};

#[test]
fn default_request_targets_the_guardian_endpoint() {
    let url = SearchRequest::default()
        .to_url()
        .expect("default request must render");
    assert!(url.as_str().starts_with(DEFAULT_ENDPOINT));
    // Only the always-on pairs: show-tags and api-key.
    assert_eq!(url.query_pairs().count(), 2);
}

#[test]
fn set_parameters_become_query_pairs() {
    let request = SearchRequest {
        query: Some("climate change".to_string()),
        section: Some("environment".to_string()),
        order_by: Some("newest".to_string()),
        page_size: Some(20),
        ..SearchRequest::default()
    };

    let url = request.to_url().expect("request must render");
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    assert!(pairs.contains(&("q".to_string(), "climate change".to_string())));
    assert!(pairs.contains(&("section".to_string(), "environment".to_string())));
    assert!(pairs.contains(&("order-by".to_string(), "newest".to_string())));
    assert!(pairs.contains(&("page-size".to_string(), "20".to_string())));
    assert!(pairs.contains(&("show-tags".to_string(), "contributor".to_string())));
    assert!(pairs.contains(&("api-key".to_string(), "test".to_string())));
}

#[test]
fn unset_parameters_stay_out_of_the_url() {
    let url = SearchRequest::default()
        .to_url()
        .expect("default request must render");
    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();

    assert!(!keys.contains(&"q".to_string()));
    assert!(!keys.contains(&"section".to_string()));
    assert!(!keys.contains(&"order-by".to_string()));
    assert!(!keys.contains(&"page-size".to_string()));
}

#[test]
fn relative_endpoint_fails_to_render() {
    let request = SearchRequest {
        endpoint: "search-without-scheme".to_string(),
        ..SearchRequest::default()
    };
    assert!(request.to_url().is_err());
}
