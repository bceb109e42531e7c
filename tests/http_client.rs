// tests/http_client.rs
//
// Exercises HttpAnalysisClient against a one-shot HTTP responder on a local
// port, capturing what the client actually sent.
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use uxstream_auditor::client::{
    AnalysisBackend, AnalysisError, FailureKind, HttpAnalysisClient, VideoUpload,
};
use uxstream_auditor::report::{DecodeError, Level, ReportView};
use uxstream_auditor::settings::ClientSettings;

struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let request = read_request(&stream);

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (base_url, handle)
}

fn read_request(stream: &TcpStream) -> CapturedRequest {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let content_length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok());
    let chunked = headers.iter().any(|(key, value)| {
        key.eq_ignore_ascii_case("transfer-encoding") && value.eq_ignore_ascii_case("chunked")
    });

    let mut body = Vec::new();
    if let Some(length) = content_length {
        body.resize(length, 0);
        reader.read_exact(&mut body).unwrap();
    } else if chunked {
        loop {
            let mut size_line = String::new();
            reader.read_line(&mut size_line).unwrap();
            let size = usize::from_str_radix(size_line.trim(), 16).unwrap();
            let mut chunk = vec![0; size + 2];
            reader.read_exact(&mut chunk).unwrap();
            if size == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..size]);
        }
    }

    CapturedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body,
    }
}

fn client_for(base_url: &str) -> HttpAnalysisClient {
    let settings = ClientSettings {
        base_url: base_url.to_string(),
        request_timeout_secs: Some(10),
    };
    HttpAnalysisClient::new(&settings).unwrap()
}

fn video_fixture() -> (tempfile::TempDir, VideoUpload) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signup.mp4");
    std::fs::write(&path, b"fake video bytes").unwrap();
    let upload = VideoUpload::from_path(&path);
    (dir, upload)
}

#[test]
fn posts_multipart_file_and_decodes_report() {
    let (base_url, server) = serve_once(
        200,
        r#"{"result":"{\"events\":[{\"timestamp\":\"00:03.50\",\"type\":\"Hesitation\",\"severity\":\"Low\",\"description\":\"Hovered over menu\"}],\"scenarios\":{\"baseline\":{\"score\":72,\"risk\":\"Medium\"}},\"recommendation\":[\"Label the menu\"]}"}"#,
    );
    let (_dir, upload) = video_fixture();

    let report = client_for(&base_url).analyze(&upload).unwrap();
    let request = server.join().unwrap();

    assert_eq!(request.request_line, "POST /analyze HTTP/1.1");
    let content_type = request.header("content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"signup.mp4\""));
    assert!(body.contains("fake video bytes"));

    let view = ReportView::from_report(&report);
    assert_eq!(view.events[0].level, Level::Low);
    assert_eq!(view.scenarios[0].name, "Current");
    assert_eq!(view.recommendations, vec!["Label the menu".to_string()]);
}

#[test]
fn non_success_status_is_a_transport_failure() {
    let (base_url, server) = serve_once(500, r#"{"detail":"Internal Server Error"}"#);
    let (_dir, upload) = video_fixture();

    let err = client_for(&base_url).analyze(&upload).unwrap_err();
    server.join().unwrap();

    match &err {
        AnalysisError::Status { status, body } => {
            assert_eq!(*status, 500);
            assert!(body.contains("Internal Server Error"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[test]
fn double_encoded_garbage_is_a_decode_failure() {
    let (base_url, server) = serve_once(200, r#"{"result":"```json\n{ oops"}"#);
    let (_dir, upload) = video_fixture();

    let err = client_for(&base_url).analyze(&upload).unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, AnalysisError::Decode(DecodeError::Report(_))));
    assert_eq!(err.kind(), FailureKind::Decode);
}

#[test]
fn unreachable_service_is_a_transport_failure() {
    // Bind then drop to get a port nothing is listening on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let (_dir, upload) = video_fixture();

    let err = client_for(&format!("http://127.0.0.1:{}", port))
        .analyze(&upload)
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Transport(_)));
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[test]
fn missing_video_file_fails_before_any_request() {
    let client = client_for("http://127.0.0.1:9");
    let upload = VideoUpload::from_path("/no/such/video.mp4");

    let err = client.analyze(&upload).unwrap_err();
    assert!(matches!(err, AnalysisError::Io { .. }));
}
