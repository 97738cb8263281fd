use crate::errors::ServerError;
use crate::handlers::{admin, api, assets, pages};
use crate::responses::{json_error_response, ResultResp};
use crate::state::AppState;
use crate::templates;
use astra::{Request, Response};
use tracing::debug;

/// Dispatches a request. HTML routes return their errors for the caller to
/// render; `/api/*` and `POST /chat` always answer with JSON.
pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    if let Some(rel) = path.strip_prefix("/static/") {
        return match method.as_str() {
            "GET" => assets::serve(state, rel),
            _ => Err(ServerError::NotFound),
        };
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => pages::home(state),
        ("GET", ["properties"]) => pages::properties(&req, state),
        ("GET", ["property", id]) => pages::detail(state, id),
        ("GET", ["search"]) => pages::search_results(&req, state),
        ("GET", ["predict"]) => pages::predict_form(),
        ("POST", ["predict"]) => pages::predict_submit(req, state),
        ("GET", ["chat"]) => pages::chat(),
        ("POST", ["chat"]) => as_json(api::chat(req, state)),

        ("GET", ["admin"]) => admin::dashboard(&req, state),
        ("POST", ["admin", "add_property"]) => admin::add_property(req, state),
        ("POST", ["admin", "delete_property", id]) => admin::delete_property(state, id),

        ("GET", ["api", "properties"]) => as_json(api::properties(state)),
        ("POST", ["api", "search_properties"]) => as_json(api::search_properties(req, state)),
        ("POST", ["api", "predict"]) => as_json(api::predict(req, state)),
        (_, ["api", ..]) => as_json(Err(ServerError::NotFound)),

        _ => Err(ServerError::NotFound),
    }
}

/// `handle` plus HTML error pages; what the server hands back to clients.
pub fn respond(req: Request, state: &AppState) -> Response {
    handle(req, state).unwrap_or_else(templates::html_error_response)
}

fn as_json(result: ResultResp) -> ResultResp {
    Ok(result.unwrap_or_else(json_error_response))
}
