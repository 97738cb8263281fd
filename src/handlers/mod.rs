// src/handlers/mod.rs
//
// Route handlers, grouped by surface. The router picks one; each returns a
// full response or a `ServerError`.

pub mod admin;
pub mod api;
pub mod assets;
pub mod pages;

use crate::errors::ServerError;
use crate::state::AppState;
use crate::upload::{parse_form, read_body, SubmittedForm};
use astra::Request;

/// Reads and decodes a form body (urlencoded or multipart) under the upload
/// size limit.
pub(crate) fn read_form(req: Request, state: &AppState) -> Result<SubmittedForm, ServerError> {
    let limit = state.config.max_upload_bytes;

    let declared = req
        .headers()
        .get("Content-Length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    if declared.is_some_and(|len| len > limit) {
        return Err(ServerError::PayloadTooLarge);
    }

    let content_type = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = read_body(req.into_body(), limit)?;
    parse_form(content_type.as_deref(), body)
}

/// Reads a JSON body under the upload size limit.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(req: Request, state: &AppState) -> Result<T, ServerError> {
    let body = read_body(req.into_body(), state.config.max_upload_bytes)?;
    serde_json::from_slice(&body).map_err(|e| ServerError::BadRequest(format!("invalid JSON body: {e}")))
}
