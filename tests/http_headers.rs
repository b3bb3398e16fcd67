use std::collections::HashMap;

use reqcurl::{Client, Cookie, Payload};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[cfg_attr(miri, ignore)]
#[tokio::test(flavor = "multi_thread")]
async fn test_custom_header_sent() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/headers"))
        .and(header("X-Test-Header", "reqcurl"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let host = server.uri();
    let body = tokio::task::spawn_blocking(move || {
        let mut client = Client::new(host)?;
        client.set_headers(HashMap::from([(
            "X-Test-Header".to_string(),
            "reqcurl".to_string(),
        )]));
        client.get("/headers", Payload::Empty)
    })
    .await
    .expect("blocking task")
    .expect("request should succeed");
    assert_eq!(body, b"ok");
}

#[cfg_attr(miri, ignore)]
#[tokio::test(flavor = "multi_thread")]
async fn test_cookies_sent_as_one_header() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cookies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let host = server.uri();
    tokio::task::spawn_blocking(move || {
        let mut client = Client::new(host)?;
        let mut session = Cookie::new("session", "abc");
        session.http_only = true;
        session.domain = Some("example.com".to_string());
        client.set_cookies(vec![session, Cookie::new("lang", "en")]);
        client.get("/cookies", Payload::Empty)
    })
    .await
    .expect("blocking task")
    .expect("request should succeed");

    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 1);
    let cookies: Vec<_> = requests[0]
        .headers
        .get_all("cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    assert_eq!(cookies, vec!["session=abc; lang=en"]);
}
