// src/handlers/assets.rs

use crate::errors::ServerError;
use crate::responses::{file_response, ResultResp};
use crate::state::AppState;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Serves `/static/<rel>` from the static directory.
pub fn serve(state: &AppState, rel: &str) -> ResultResp {
    let rel = safe_relative(rel).ok_or(ServerError::NotFound)?;
    let path = state.config.static_dir.join(&rel);

    if !path.is_file() {
        return Err(ServerError::NotFound);
    }

    match fs::read(&path) {
        Ok(bytes) => file_response(bytes, &path),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ServerError::NotFound),
        Err(e) => Err(ServerError::InternalError(e.to_string())),
    }
}

/// Only plain path segments survive; `..`, absolute paths, backslashes and
/// empty requests are refused.
fn safe_relative(rel: &str) -> Option<PathBuf> {
    if rel.is_empty() || rel.contains('\\') || rel.contains('\0') {
        return None;
    }

    let path = Path::new(rel);
    path.components()
        .all(|c| matches!(c, Component::Normal(_)))
        .then(|| path.to_path_buf())
}
