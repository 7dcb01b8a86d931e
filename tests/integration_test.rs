//! Integration tests for the Memento facade.
//!
//! These tests run the full pipeline (addressing, transaction capture, WARC
//! record construction) against a mock HTTP server standing in for the
//! Memento API. No real network requests are made.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use memento_warc::{MementoApi, MementoError, WarcRecordKind};

fn api_for(server: &mockito::Server) -> MementoApi {
    MementoApi::new(&format!("{}/web/", server.url())).expect("client construction")
}

fn utc_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

#[test]
fn load_url_warc_yields_one_request_and_one_response_record() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/web/20230101000000/https://www.example.com/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>archived</html>")
        .create();

    let api = api_for(&server);
    let records = api
        .load_url_warc("https://www.example.com/", Some(utc_timestamp()), false)
        .expect("record sequence");
    mock.assert();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kind, WarcRecordKind::Request);
    assert_eq!(records[1].kind, WarcRecordKind::Response);
    for record in &records {
        assert_eq!(record.content_type, "application/http");
    }
    assert!(records[0].http_headers.status_line.starts_with("GET "));
    assert!(records[1].http_headers.status_line.contains(" 200 "));
    assert_eq!(records[1].payload, b"<html>archived</html>");
}

#[test]
fn timestamps_are_normalized_to_utc_for_addressing() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/web/20230101000000/https://www.example.com/")
        .with_status(200)
        .with_body("ok")
        .create();

    // Same instant as midnight UTC, expressed with a +01:00 offset.
    let offset = FixedOffset::east_opt(3600).unwrap();
    let zoned = offset.with_ymd_and_hms(2023, 1, 1, 1, 0, 0).unwrap();

    let api = api_for(&server);
    let records = api
        .load_url_warc("https://www.example.com/", Some(zoned), false)
        .expect("record sequence");
    mock.assert();
    assert_eq!(records.len(), 2);
}

#[test]
fn missing_timestamp_addresses_the_wildcard_segment() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/web/*/https://www.example.com/")
        .with_status(200)
        .with_body("ok")
        .create();

    let api = api_for(&server);
    let records = api
        .load_url_warc(
            "https://www.example.com/",
            None::<DateTime<Utc>>,
            false,
        )
        .expect("record sequence");
    mock.assert();
    assert_eq!(records.len(), 2);
}

#[test]
fn raw_mode_addresses_the_id_suffix() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/web/20230101000000id_/https://www.example.com/")
        .with_status(200)
        .with_body("raw bytes")
        .create();

    let api = api_for(&server);
    let records = api
        .load_url_warc("https://www.example.com/", Some(utc_timestamp()), true)
        .expect("record sequence");
    mock.assert();
    assert_eq!(records[1].payload, b"raw bytes");
}

#[test]
fn redirect_chains_interleave_records_hop_by_hop() {
    let mut server = mockito::Server::new();
    let first = server
        .mock("GET", "/web/*/https://www.example.com/old")
        .with_status(302)
        .with_header("Location", "/web/*/https://www.example.com/new")
        .create();
    let second = server
        .mock("GET", "/web/*/https://www.example.com/new")
        .with_status(200)
        .with_body("moved here")
        .create();

    let api = api_for(&server);
    let records = api
        .load_url_warc(
            "https://www.example.com/old",
            None::<DateTime<Utc>>,
            false,
        )
        .expect("record sequence");
    first.assert();
    second.assert();

    assert_eq!(records.len(), 4);
    let kinds: Vec<_> = records.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            WarcRecordKind::Request,
            WarcRecordKind::Response,
            WarcRecordKind::Request,
            WarcRecordKind::Response,
        ]
    );
    // Hop order is chronological: the redirect hop comes first.
    assert!(records[1].http_headers.status_line.contains(" 302 "));
    assert!(records[3].http_headers.status_line.contains(" 200 "));
    assert_eq!(records[3].payload, b"moved here");
}

#[test]
fn non_success_final_status_is_a_hard_failure() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/web/*/https://www.example.com/gone")
        .with_status(404)
        .with_body("not archived")
        .create();

    let api = api_for(&server);
    let err = api
        .load_url_warc(
            "https://www.example.com/gone",
            None::<DateTime<Utc>>,
            false,
        )
        .expect_err("non-2xx must fail");
    match err {
        MementoError::HttpStatus { status } => assert_eq!(status.as_u16(), 404),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_url_returns_the_raw_response() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/web/20230101000000/https://www.example.com/")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("plain capture")
        .create();

    let api = api_for(&server);
    let response = api
        .load_url("https://www.example.com/", Some(utc_timestamp()), false)
        .expect("response");
    mock.assert();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().unwrap(), "plain capture");
}

#[test]
fn load_url_propagates_http_status_errors() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/web/*/https://www.example.com/")
        .with_status(503)
        .create();

    let api = api_for(&server);
    let err = api
        .load_url("https://www.example.com/", None::<DateTime<Utc>>, false)
        .expect_err("non-2xx must fail");
    assert!(matches!(
        err,
        MementoError::HttpStatus { status } if status.as_u16() == 503
    ));
}

#[test]
fn load_capture_uses_the_capture_timestamp() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/web/20220615123045/https://www.example.com/page")
        .with_status(200)
        .with_body("capture body")
        .create();

    let capture = memento_warc::CdxCapture {
        url: "https://www.example.com/page".to_string(),
        timestamp: Utc.with_ymd_and_hms(2022, 6, 15, 12, 30, 45).unwrap(),
        mimetype: Some("text/html".to_string()),
        status_code: Some(200),
    };

    let api = api_for(&server);
    let records = api.load_capture_warc(&capture, false).expect("records");
    mock.assert();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].target_uri,
        format!("{}/web/20220615123045/https://www.example.com/page", server.url())
    );
}

#[test]
fn load_capture_returns_the_raw_response() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/web/20220615123045id_/https://www.example.com/page")
        .with_status(200)
        .with_body("raw capture")
        .create();

    let capture = memento_warc::CdxCapture {
        url: "https://www.example.com/page".to_string(),
        timestamp: Utc.with_ymd_and_hms(2022, 6, 15, 12, 30, 45).unwrap(),
        mimetype: None,
        status_code: None,
    };

    let api = api_for(&server);
    let response = api.load_capture(&capture, true).expect("response");
    mock.assert();
    assert_eq!(response.text().unwrap(), "raw capture");
}
