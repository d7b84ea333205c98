use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use serde_json::{Value, json};

use wordbook::api::{ApiClient, ApiError, ApiRequest, Endpoint};

struct Captured {
    request_line: String,
    body: String,
}

/// Serve exactly one HTTP exchange on a loopback port and report what the
/// client sent.
fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0usize;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut raw_body = vec![0u8; content_length];
        reader.read_exact(&mut raw_body).unwrap();

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        let _ = tx.send(Captured {
            request_line: request_line.trim_end().to_string(),
            body: String::from_utf8(raw_body).unwrap(),
        });
    });

    (base_url, rx)
}

#[test]
fn answer_update_posts_pkey_and_true_flag() {
    let (base_url, rx) = serve_once("200 OK", r#"{"msg": "updated"}"#);
    let client = ApiClient::new(&base_url, None).unwrap();

    let reply = client
        .execute(&ApiRequest::UpdateIsCorrect { pkey: 1 })
        .unwrap();
    assert_eq!(reply, json!({"msg": "updated"}));

    let captured = rx.recv().unwrap();
    assert!(captured.request_line.starts_with("POST /update/is_correct "));
    let sent: Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent, json!({"pkey": 1, "flag": "TRUE"}));
}

#[test]
fn mutation_accepts_any_success_body() {
    let (base_url, _rx) = serve_once("200 OK", "");
    let client = ApiClient::new(&base_url, None).unwrap();
    let reply = client
        .execute(&ApiRequest::UpdateBookmark { pkey: 9 })
        .unwrap();
    assert_eq!(reply, Value::Null);
}

#[test]
fn non_success_status_is_an_error() {
    let (base_url, rx) = serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#);
    let client = ApiClient::new(&base_url, None).unwrap();

    let err = client.get(Endpoint::Activity).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Status {
            path: "/activity",
            status: 500
        }
    ));
    assert!(rx.recv().unwrap().request_line.starts_with("GET /activity "));
}

#[test]
fn malformed_read_body_is_a_decode_error() {
    let (base_url, _rx) = serve_once("200 OK", "not json");
    let client = ApiClient::new(&base_url, None).unwrap();
    let err = client.get(Endpoint::Learning).unwrap_err();
    assert!(matches!(err, ApiError::Decode { path: "/learning", .. }));
}

#[test]
fn register_sends_both_values() {
    let (base_url, rx) = serve_once("200 OK", r#"{"msg": "registered"}"#);
    let client = ApiClient::new(&base_url, None).unwrap();
    client
        .execute(&ApiRequest::Register {
            english: "owl".to_string(),
            japanese: "ふくろう".to_string(),
        })
        .unwrap();

    let captured = rx.recv().unwrap();
    assert!(captured.request_line.starts_with("POST /register "));
    let sent: Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent, json!({"eng_val": "owl", "jap_val": "ふくろう"}));
}
