// src/upload.rs
//
// Request bodies: size-limited reads, urlencoded or multipart forms, and
// saving uploaded listing photos.

use crate::errors::ServerError;
use crate::forms::{parse_urlencoded, FormFields};
use astra::Body;
use bytes::Bytes;
use futures::executor::block_on;
use futures::stream;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// A file part from a multipart form.
#[derive(Debug)]
pub struct UploadedFile {
    pub field: String,
    pub file_name: String,
    pub data: Bytes,
}

/// Text fields and file parts of a submitted form.
#[derive(Debug, Default)]
pub struct SubmittedForm {
    pub fields: FormFields,
    pub files: Vec<UploadedFile>,
}

impl SubmittedForm {
    /// The named file part, if one was sent with a filename and content.
    pub fn file(&self, field: &str) -> Option<&UploadedFile> {
        self.files
            .iter()
            .find(|f| f.field == field && !f.file_name.is_empty() && !f.data.is_empty())
    }
}

/// Reads at most `limit` bytes; anything longer is `PayloadTooLarge`.
pub fn read_body(mut body: Body, limit: u64) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    body.reader()
        .take(limit + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;

    if buf.len() as u64 > limit {
        return Err(ServerError::PayloadTooLarge);
    }
    Ok(buf)
}

/// Decodes a form body by its content type: multipart or urlencoded.
pub fn parse_form(content_type: Option<&str>, body: Vec<u8>) -> Result<SubmittedForm, ServerError> {
    match content_type {
        Some(ct) if ct.starts_with("multipart/form-data") => parse_multipart(ct, body),
        _ => Ok(SubmittedForm {
            fields: parse_urlencoded(&body),
            files: Vec::new(),
        }),
    }
}

fn parse_multipart(content_type: &str, body: Vec<u8>) -> Result<SubmittedForm, ServerError> {
    let boundary = multer::parse_boundary(content_type)
        .map_err(|e| ServerError::BadRequest(format!("bad multipart boundary: {e}")))?;

    let chunks = stream::once(async move { Ok::<Bytes, std::io::Error>(Bytes::from(body)) });
    let mut multipart = multer::Multipart::new(chunks, boundary);

    block_on(async {
        let mut form = SubmittedForm::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
            let name = field.name().unwrap_or_default().to_string();

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let data = field.bytes().await.map_err(bad_multipart)?;
                    form.files.push(UploadedFile {
                        field: name,
                        file_name,
                        data,
                    });
                }
                None => {
                    let value = field.text().await.map_err(bad_multipart)?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok::<_, ServerError>(form)
    })
}

fn bad_multipart(e: multer::Error) -> ServerError {
    ServerError::BadRequest(format!("malformed multipart body: {e}"))
}

/// Reduces a client-supplied filename to a safe basename: ASCII letters,
/// digits, `.`, `-` and `_` survive, everything else becomes `_`, and leading
/// dots are dropped.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Writes the upload under `dir` as `{uuid}_{sanitized name}` and returns
/// the stored filename.
pub fn save_image(dir: &Path, file: &UploadedFile) -> Result<String, ServerError> {
    let stored = format!("{}_{}", Uuid::new_v4(), sanitize_filename(&file.file_name));

    fs::create_dir_all(dir).map_err(|e| ServerError::InternalError(e.to_string()))?;
    fs::write(dir.join(&stored), &file.data).map_err(|e| ServerError::InternalError(e.to_string()))?;

    info!(file = %stored, bytes = file.data.len(), "saved listing image");
    Ok(stored)
}
