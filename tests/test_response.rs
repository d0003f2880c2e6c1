use battery_beacon::http::response::{Response, ResponseBuilder, StatusCode};
use battery_beacon::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(body.clone())
        .build();

    assert_eq!(response.header("Content-Length"), Some("16"));
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.get("Content-Length").unwrap(), "999");
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert_eq!(response.body.len(), 0);
    assert_eq!(response.headers.get("Content-Length").unwrap(), "0");
}

#[test]
fn test_json_response_headers() {
    let body = br#"{"state":"charging"}"#.to_vec();
    let response = Response::json(body.clone());

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.headers.get("Access-Control-Allow-Origin").unwrap(), "*");
    assert_eq!(response.headers.get("Content-type").unwrap(), "application/json");
    assert_eq!(response.header("Content-Length"), Some(body.len().to_string().as_str()));
    assert_eq!(response.body, body);
}

#[test]
fn test_ok_response_has_no_content_type() {
    let response = Response::ok(b"raw bytes".to_vec());

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Type"), None);
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_not_found_helper() {
    let response = Response::not_found("File Not Found: /missing.txt");

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"File Not Found: /missing.txt".to_vec());
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
}

#[test]
fn test_not_implemented_names_method() {
    let response = Response::not_implemented("DELETE");

    assert_eq!(response.status, StatusCode::NotImplemented);
    assert_eq!(response.body, b"Unsupported method (DELETE)".to_vec());
}

#[test]
fn test_serialized_response_keeps_exact_body() {
    let body = vec![0u8, 159, 146, 150, b'\n'];
    let bytes = serialize_response(&Response::ok(body.clone()));

    assert!(bytes.starts_with(b"HTTP/1.0 200 OK\r\n"));
    assert!(bytes.ends_with(&body));
}
