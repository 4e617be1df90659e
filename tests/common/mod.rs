#![allow(dead_code)]

use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title> Test Page </title>
    <meta name="description" content="A page for testing">
    <meta name="keywords" content="test, scrape">
  </head>
  <body>
    <nav><a href="/">Home</a></nav>
    <main>
      <h1>Welcome</h1>
      <p>First paragraph</p>


      <p>Sign In to continue</p>
      <h2>Details <small>v2</small></h2>
      <p>Second paragraph</p>
    </main>
  </body>
</html>"#;

/// Upstream delay for `/slow`; tests use a fetch timeout well below it.
pub const SLOW_DELAY: Duration = Duration::from_secs(5);
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(1);

/// Starts an upstream serving `/ok`, `/missing` (404), `/broken` (500) and `/slow`.
pub async fn start_upstream() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(PAGE),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAGE)
                .set_delay(SLOW_DELAY),
        )
        .mount(&server)
        .await;

    server
}

/// Nothing listens on port 1, so connecting fails immediately.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/";
