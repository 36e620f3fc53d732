//! End-to-end pipeline tests: buffer text through the reqwest transport
//! against a raw-TCP mock backend, into a capturing sink.

mod common;

use reqdoc::render::BufferSink;
use reqdoc::{run_document, ReqwestTransport};

const JSON_REPLY: &str = "HTTP/1.1 200 OK\r\n\
    Content-Type: application/json\r\n\
    Set-Cookie: first=1\r\n\
    Set-Cookie: second=2\r\n\
    Content-Length: 11\r\n\
    Connection: close\r\n\
    \r\n\
    {\"ok\":true}";

const TEXT_REPLY: &str = "HTTP/1.1 404 Not Found\r\n\
    Content-Type: text/plain\r\n\
    Content-Length: 7\r\n\
    Connection: close\r\n\
    \r\n\
    missing";

#[tokio::test]
async fn get_exchange_renders_all_blocks() {
    let (addr, mut captured) = common::start_mock_backend(JSON_REPLY).await;
    let text = format!("URL: http://{addr}/api\nAccept: application/json\n");
    let transport = ReqwestTransport::new("").unwrap();
    let mut sink = BufferSink::default();

    let record = run_document(&text, &transport, &mut sink).await.unwrap();

    assert_eq!(record.status, 200);
    assert!(record.elapsed.as_nanos() > 0);

    let pane = &sink.contents;
    assert!(pane.contains("Request: "));
    assert!(pane.contains("Status: 200 - OK"));
    assert!(pane.contains("\nTime: "));
    // both Set-Cookie values survive into the rendered Headers block
    assert!(pane.contains("\"first=1\""));
    assert!(pane.contains("\"second=2\""));
    // body rendered as pretty JSON
    assert!(pane.contains("\"ok\": true"));

    let wire = captured.recv().await.unwrap();
    assert!(wire.starts_with("GET /api HTTP/1.1"));
    assert!(wire.contains("accept: application/json"));
}

#[tokio::test]
async fn post_body_is_canonical_json_on_the_wire() {
    let (addr, mut captured) = common::start_mock_backend(JSON_REPLY).await;
    let text = format!(
        "Method: POST\nURL: http://{addr}/submit\nContent-Type: application/json\n\n{{token: 'abc', n: 1,}}"
    );
    let transport = ReqwestTransport::new("").unwrap();
    let mut sink = BufferSink::default();

    run_document(&text, &transport, &mut sink).await.unwrap();

    let wire = captured.recv().await.unwrap();
    assert!(wire.starts_with("POST /submit HTTP/1.1"));
    assert!(wire.ends_with(r#"{"n":1,"token":"abc"}"#));
}

#[tokio::test]
async fn non_json_reply_renders_raw_body() {
    let (addr, _captured) = common::start_mock_backend(TEXT_REPLY).await;
    let text = format!("URL: http://{addr}/nope\n");
    let transport = ReqwestTransport::new("").unwrap();
    let mut sink = BufferSink::default();

    let record = run_document(&text, &transport, &mut sink).await.unwrap();

    assert_eq!(record.status, 404);
    assert_eq!(record.json, None);
    assert!(sink.contents.contains("Status: 404 - Not Found"));
    assert!(sink.contents.contains("\nmissing\n"));
}

#[tokio::test]
async fn unreachable_host_renders_error_block() {
    // bind-then-drop leaves a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let text = format!("URL: http://{addr}/\n");
    let transport = ReqwestTransport::new("").unwrap();
    let mut sink = BufferSink::default();

    let result = run_document(&text, &transport, &mut sink).await;

    assert!(result.is_err());
    assert!(sink.contents.contains("Error: "));
    assert!(!sink.contents.contains("Status: "));
}
