use std::collections::HashMap;

use rshttpd::http::request::{Method, Request};

fn request_with_headers(headers: HashMap<String, String>) -> Request {
    Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
    }
}

#[test]
fn test_method_from_token() {
    assert_eq!(Method::from_token("GET"), Method::GET);
    assert_eq!(Method::from_token("HEAD"), Method::HEAD);
    assert_eq!(Method::from_token("POST"), Method::POST);
    assert_eq!(Method::from_token("DELETE"), Method::OTHER);
    assert_eq!(Method::from_token("PATCH"), Method::OTHER);
    assert_eq!(Method::from_token(""), Method::OTHER);
}

#[test]
fn test_method_from_token_is_case_sensitive() {
    assert_eq!(Method::from_token("get"), Method::OTHER);
    assert_eq!(Method::from_token("Post"), Method::OTHER);
}

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("User-Agent".to_string(), "test-client/1".to_string());

    let req = request_with_headers(headers);
    assert_eq!(req.header("User-Agent"), Some("test-client/1"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_lookup_is_exact_key() {
    let mut headers = HashMap::new();
    headers.insert("User-Agent".to_string(), "x".to_string());

    let req = request_with_headers(headers);
    assert_eq!(req.header("user-agent"), None);
}

#[test]
fn test_request_user_agent() {
    let mut headers = HashMap::new();
    headers.insert("User-Agent".to_string(), "curl/8.0".to_string());

    let req = request_with_headers(headers);
    assert_eq!(req.user_agent(), Some("curl/8.0"));
    assert_eq!(request_with_headers(HashMap::new()).user_agent(), None);
}

#[test]
fn test_request_content_length_parsing() {
    let mut headers = HashMap::new();
    headers.insert("Content-Length".to_string(), "42".to_string());

    let req = request_with_headers(headers);
    assert_eq!(req.content_length(), Some(42));
}

#[test]
fn test_request_content_length_trims_padding() {
    let mut headers = HashMap::new();
    headers.insert("Content-Length".to_string(), " 5 ".to_string());

    let req = request_with_headers(headers);
    assert_eq!(req.content_length(), Some(5));
}

#[test]
fn test_request_content_length_missing() {
    let req = request_with_headers(HashMap::new());
    assert_eq!(req.content_length(), None);
}

#[test]
fn test_request_content_length_invalid() {
    let mut headers = HashMap::new();
    headers.insert("Content-Length".to_string(), "not-a-number".to_string());

    let req = request_with_headers(headers);
    assert_eq!(req.content_length(), None);
}

#[test]
fn test_request_content_length_negative_is_invalid() {
    let mut headers = HashMap::new();
    headers.insert("Content-Length".to_string(), "-5".to_string());

    let req = request_with_headers(headers);
    assert_eq!(req.content_length(), None);
}
