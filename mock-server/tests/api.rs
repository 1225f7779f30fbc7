use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, shared_state, StubResponse};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

// --- recording ---

#[tokio::test]
async fn records_method_path_headers_and_body() {
    let state = shared_state();
    let request = Request::builder()
        .method("POST")
        .uri("/test?ignored=1")
        .header("Content-Type", "text/plain")
        .body("payload".to_string())
        .unwrap();

    app(state.clone()).oneshot(request).await.unwrap();

    let state = state.read().await;
    let recorded = state.recorded.last().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/test");
    assert_eq!(recorded.body, b"payload");
    assert_eq!(recorded.body_utf8(), "payload");
    assert_eq!(recorded.header("content-type"), Some("text/plain"));
}

#[tokio::test]
async fn records_requests_in_arrival_order() {
    let state = shared_state();
    for path in ["/first", "/second"] {
        let request = Request::builder().uri(path).body(String::new()).unwrap();
        app(state.clone()).oneshot(request).await.unwrap();
    }

    let state = state.read().await;
    let paths: Vec<&str> = state.recorded.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/first", "/second"]);
}

#[tokio::test]
async fn header_lookup_is_case_insensitive() {
    let state = shared_state();
    let request = Request::builder()
        .uri("/test")
        .header("X-Custom", "value")
        .body(String::new())
        .unwrap();

    app(state.clone()).oneshot(request).await.unwrap();

    let state = state.read().await;
    let recorded = state.recorded.last().unwrap();
    assert_eq!(recorded.header("x-custom"), Some("value"));
    assert!(recorded.has_header("X-CUSTOM"));
    assert!(!recorded.has_header("content-length"));
}

// --- stubbing ---

#[tokio::test]
async fn default_stub_is_200_with_empty_body() {
    let state = shared_state();
    let request = Request::builder().uri("/test").body(String::new()).unwrap();

    let response = app(state).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn stubbed_status_headers_and_body_are_returned() {
    let state = shared_state();
    state.write().await.stub = StubResponse {
        status: 404,
        headers: vec![
            ("name".to_string(), "first".to_string()),
            ("name".to_string(), "second".to_string()),
        ],
        body: b"not here".to_vec(),
    };
    let request = Request::builder().uri("/test").body(String::new()).unwrap();

    let response = app(state).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let values: Vec<&str> = response
        .headers()
        .get_all("name")
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(values, ["first", "second"]);
    assert_eq!(body_bytes(response).await.as_ref(), b"not here");
}

#[tokio::test]
async fn non_utf8_stub_bodies_pass_through_as_raw_bytes() {
    let state = shared_state();
    // "déjà vu" in ISO-8859-1, not valid UTF-8.
    let latin1 = vec![0x64, 0xE9, 0x6A, 0xE0, 0x20, 0x76, 0x75];
    state.write().await.stub = StubResponse {
        status: 200,
        headers: Vec::new(),
        body: latin1.clone(),
    };
    let request = Request::builder().uri("/test").body(String::new()).unwrap();

    let response = app(state).oneshot(request).await.unwrap();

    assert_eq!(body_bytes(response).await.as_ref(), latin1.as_slice());
}

#[tokio::test]
async fn any_path_and_method_are_served() {
    let state = shared_state();
    let request = Request::builder()
        .method("PURGE")
        .uri("/anywhere/at/all")
        .body(String::new())
        .unwrap();

    let response = app(state.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.read().await.recorded.last().unwrap().method, "PURGE");
}
