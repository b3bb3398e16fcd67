use reqcurl::{Client, ContentType, HttpMethod, Payload};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn send(
    host: String,
    path: &'static str,
    method: HttpMethod,
    payload: Payload,
    content_type: ContentType,
) -> reqcurl::Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || {
        let client = Client::new(host)?;
        client.request(path, method, payload, content_type)
    })
    .await
    .expect("blocking task should finish")
}

async fn execute_with_method(server: &MockServer, request_method: HttpMethod) {
    Mock::given(method(request_method.to_string().as_str()))
        .and(path("/resource"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(server)
        .await;

    let body = send(
        server.uri(),
        "/resource",
        request_method,
        Payload::Empty,
        ContentType::Json,
    )
    .await
    .expect("request should succeed");
    assert_eq!(body, b"ok");
}

#[cfg_attr(miri, ignore)]
#[tokio::test(flavor = "multi_thread")]
async fn test_every_method_reaches_the_server() {
    if !can_bind_localhost() {
        return;
    }

    for request_method in [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ] {
        let server = MockServer::start().await;
        execute_with_method(&server, request_method).await;
    }
}

#[cfg_attr(miri, ignore)]
#[tokio::test(flavor = "multi_thread")]
async fn test_get_replaces_query_with_payload() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("namespace", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let body = send(
        server.uri(),
        "/items?x=1",
        HttpMethod::Get,
        Payload::map([("namespace", "1")]),
        ContentType::Json,
    )
    .await
    .expect("request should succeed");
    assert_eq!(body, b"[]");

    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("namespace=1"));
    assert!(requests[0].body.is_empty());
    assert_eq!(
        requests[0]
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

#[cfg_attr(miri, ignore)]
#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_form_type_still_uses_query() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let body = send(
        server.uri(),
        "/items",
        HttpMethod::Delete,
        Payload::map([("id", "7"), ("reason", "no longer needed")]),
        ContentType::Form,
    )
    .await
    .expect("request should succeed");
    assert!(body.is_empty());

    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests[0].url.query(), Some("id=7&reason=no+longer+needed"));
    assert!(requests[0].body.is_empty());
}
