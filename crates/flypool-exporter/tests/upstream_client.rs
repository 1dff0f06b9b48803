#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use flypool_core::error::{ErrorKind, ExporterError};
use flypool_exporter::config::AccountConfig;
use flypool_exporter::scrape::{scrape_account, AccountSample};
use flypool_exporter::upstream::{stats_url, UpstreamClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn stats_url_is_plain_concatenation() {
    assert_eq!(
        stats_url("https://api.ethermine.org", "0xabc"),
        "https://api.ethermine.org/miner/0xabc/currentStats"
    );
    // no slash normalization
    assert_eq!(
        stats_url("https://api.ethermine.org/", "0xabc"),
        "https://api.ethermine.org//miner/0xabc/currentStats"
    );
}

#[tokio::test]
async fn fetch_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/miner/0xabc/currentStats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"OK"}"#))
        .mount(&server)
        .await;

    let body = UpstreamClient::new()
        .fetch(&server.uri(), "0xabc")
        .await
        .expect("fetch ok");
    assert_eq!(body, r#"{"status":"OK"}"#);
}

#[tokio::test]
async fn fetch_non_200_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = UpstreamClient::new()
        .fetch(&server.uri(), "0xabc")
        .await
        .expect_err("must fail");
    assert!(matches!(err, ExporterError::UpstreamStatus(503)));
    assert!(!err.kind().is_fatal());
    assert_eq!(err.to_string(), "HTTP returned code 503");
}

#[tokio::test]
async fn fetch_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = UpstreamClient::new()
        .fetch(&uri, "0xabc")
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn fetch_truncated_body_is_body_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf).await;
        // promises 100 bytes, sends 13, then hangs up
        stream
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\n{\"status\":\"OK")
            .await
            .unwrap();
        stream.shutdown().await.unwrap();
    });

    let err = UpstreamClient::new()
        .fetch(&uri, "0xabc")
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::UpstreamBody);
    assert!(!err.kind().is_fatal());
}

#[tokio::test]
async fn scrape_account_marks_up_only_on_ok_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/miner/good/currentStats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"status":"OK","data":{"activeWorkers":4}}"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/miner/bad/currentStats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"status":"FAIL","data":{"activeWorkers":4}}"#),
        )
        .mount(&server)
        .await;

    let client = UpstreamClient::new();
    let good = AccountConfig {
        api_url: server.uri(),
        account_id: "good".into(),
    };
    let bad = AccountConfig {
        api_url: server.uri(),
        account_id: "bad".into(),
    };

    let sample = scrape_account(&client, &good).await;
    assert!(sample.up);
    assert_eq!(sample.stats.data.active_workers, 4);

    assert_eq!(scrape_account(&client, &bad).await, AccountSample::down());
}
