use std::fs;

use wordfreq_export::ExportError;
use wordfreq_types::{OutputFormat, TextStatsRequest};

use super::test_state;
use crate::service::{AnalyzeRequest, Input, Response, ServiceError, analyze, parse_format};

fn request(text: &str, format: OutputFormat) -> AnalyzeRequest {
    AnalyzeRequest {
        input: Input::Text(text.to_string()),
        format,
        top_n: None,
    }
}

#[test]
fn test_json_response_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let response = analyze(&state, request("Xin chào! Xin chào mọi người.", OutputFormat::Json));
    let body = match response {
        Ok(Response::Json(body)) => body,
        other => panic!("expected json, got {other:?}"),
    };

    assert_eq!(
        body,
        r#"{"status":"success","message":"Text analysis completed successfully","data":{"counts":{"xin chào":2}}}"#
    );
}

#[test]
fn test_json_keeps_ranked_order() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let text = "Đây là ví dụ về dự án nhỏ. Dự án, dự án!";
    let Ok(Response::Json(body)) = analyze(&state, request(text, OutputFormat::Json)) else {
        panic!("expected json");
    };

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["data"]["counts"]["dự án"], 3);
    assert_eq!(value["data"]["counts"]["ví dụ"], 1);
    assert!(body.find("dự án").unwrap() < body.find("đây").unwrap());
    assert!(body.find("đây").unwrap() < body.find("ví dụ").unwrap());
}

#[test]
fn test_blank_text_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let err = analyze(&state, request("   \n", OutputFormat::Json)).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput));
    assert!(err.is_client_error());
}

#[test]
fn test_only_stopwords_is_no_content() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let response = analyze(&state, request("the, the! and.", OutputFormat::Csv)).unwrap();
    assert!(matches!(response, Response::NoContent { .. }));
    // Nothing is written for an empty result
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_utf8_upload() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let request = AnalyzeRequest {
        input: Input::Upload(vec![0x78, 0x69, 0x6e, 0xff, 0xfe]),
        format: OutputFormat::Json,
        top_n: None,
    };
    let err = analyze(&state, request).unwrap_err();
    assert!(matches!(err, ServiceError::Encoding(_)));
}

#[test]
fn test_utf8_upload() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let request = AnalyzeRequest {
        input: Input::Upload("Xin chào dự án".as_bytes().to_vec()),
        format: OutputFormat::Json,
        top_n: None,
    };
    assert!(matches!(analyze(&state, request), Ok(Response::Json(_))));
}

#[test]
fn test_unsupported_format() {
    let err = parse_format("xlsx").unwrap_err();
    assert!(matches!(err, ServiceError::UnsupportedFormat(_)));
    assert!(err.is_client_error());
    assert_eq!(parse_format("PNG").unwrap(), OutputFormat::Png);
}

#[test]
fn test_csv_artifacts_get_unique_names() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path().join("output").as_path());

    let first = analyze(&state, request("dự án rust", OutputFormat::Csv)).unwrap();
    let second = analyze(&state, request("dự án rust", OutputFormat::Csv)).unwrap();

    let (Response::File { path: a, .. }, Response::File { path: b, .. }) = (first, second) else {
        panic!("expected files");
    };
    assert_ne!(a, b);
    assert_eq!(a.extension().unwrap(), "csv");
    assert!(a.starts_with(dir.path().join("output")));

    let content = fs::read_to_string(&a).unwrap();
    assert_eq!(content, "\u{feff}words,counts\ndự án,1\nrust,1\n");
}

#[test]
fn test_png_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let request = AnalyzeRequest {
        input: Input::Text("xin chào xin chào dự án".to_string()),
        format: OutputFormat::Png,
        top_n: Some(3),
    };
    let Ok(Response::File { path, format }) = analyze(&state, request) else {
        panic!("expected png file");
    };

    assert_eq!(format, OutputFormat::Png);
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn test_png_rejects_zero_top_n() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let request = AnalyzeRequest {
        input: Input::Text("xin chào".to_string()),
        format: OutputFormat::Png,
        top_n: Some(0),
    };
    let err = analyze(&state, request).unwrap_err();
    assert!(matches!(err, ServiceError::Export(ExportError::InvalidTopN(0))));
    assert!(err.is_client_error());
}

#[test]
fn test_from_text_stats_request() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let request: TextStatsRequest = serde_json::from_str(r#"{"text":"Xin chào"}"#).unwrap();
    let response = analyze(&state, request.into()).unwrap();
    assert!(matches!(response, Response::Json(_)));
}
