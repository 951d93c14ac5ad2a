//! Tests for answering axum handlers with failures.

#![cfg(feature = "axum")]

use axum::{
    body::to_bytes,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use fail_error::{FailKind, MESSAGE_UNEXPECTED, conflict, not_found_with};
use fail_response::{BodyFormat, HttpFail, ResponseConfig, Responder};
use http::StatusCode;

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8_lossy(&bytes).into_owned()
}

fn load_widget(id: &str) -> Result<String, HttpFail> {
    let id: u32 = id.parse()?;
    match id {
        0 => Err(not_found_with("no widget 0").into()),
        7 => Err(conflict("widget 7 is being edited").into()),
        _ => Ok(format!("widget {id}")),
    }
}

#[tokio::test]
async fn failure_becomes_plain_text_response() {
    let response = load_widget("0").unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_text(response).await, "no widget 0\n");
}

#[tokio::test]
async fn foreign_error_is_masked_as_unexpected() {
    let err = load_widget("seven").unwrap_err();
    assert_eq!(err.0.kind(), Some(FailKind::Unexpected));
    assert_eq!(err.0.render("%e"), "invalid digit found in string");

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, format!("{MESSAGE_UNEXPECTED}\n"));
}

#[test]
fn converted_failure_keeps_its_location() {
    let original = conflict("taken");
    let line = original.line();
    let converted = HttpFail::from(original).into_inner();
    assert_eq!(converted.line(), line);
    assert_eq!(converted.kind(), Some(FailKind::Conflict));
}

#[tokio::test]
async fn responder_builds_json_axum_response() {
    let responder = Responder::new(ResponseConfig::builder().format(BodyFormat::Json).build());
    let err = load_widget("7").unwrap_err().into_inner();
    let response = responder.axum_response(Some(&err));

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(
        body_text(response).await,
        r#"{"status":409,"message":"widget 7 is being edited"}"#
    );
}
