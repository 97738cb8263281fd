mod admin_tests;
mod api_tests;
mod page_tests;

use astra::{Body, Response};
use std::io::Read;

pub(crate) fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub(crate) fn location(resp: &Response) -> &str {
    resp.headers().get("Location").unwrap().to_str().unwrap()
}

pub(crate) fn get(uri: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub(crate) fn post(uri: &str, content_type: &str, body: impl Into<Vec<u8>>) -> astra::Request {
    http::Request::builder()
        .method(http::Method::POST)
        .uri(uri)
        .header("Content-Type", content_type)
        .body(Body::from(body.into()))
        .unwrap()
}

pub(crate) const FORM: &str = "application/x-www-form-urlencoded";
pub(crate) const JSON: &str = "application/json";
