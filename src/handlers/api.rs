// src/handlers/api.rs
//
// JSON endpoints. Errors from these handlers are rendered as `{"error": ...}`
// by the router.

use crate::domain::{format_rupiah, Listing};
use crate::errors::ServerError;
use crate::estimator::{EstimateError, PredictionInput};
use crate::forms::text;
use crate::handlers::{read_form, read_json};
use crate::responses::{json_response, ResultResp};
use crate::search::{is_property_related, search};
use crate::state::AppState;
use astra::Request;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Listings attached to a chat reply about properties.
pub const CHAT_SUGGESTIONS: usize = 3;

pub const MSG_CANNOT_PREDICT: &str =
    "Cannot predict price with current data. Please check if all required fields are provided.";

#[derive(Deserialize)]
struct SearchRequest {
    #[serde(default)]
    query: String,
}

#[derive(Serialize)]
struct PredictionResponse {
    prediction: f64,
    formatted: String,
}

#[derive(Serialize)]
struct ChatResponse {
    response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Vec<Listing>>,
}

pub fn properties(state: &AppState) -> ResultResp {
    json_response(200, &state.store.load()?)
}

pub fn search_properties(req: Request, state: &AppState) -> ResultResp {
    let body: SearchRequest = read_json(req, state)?;
    json_response(200, &search(&state.store, &body.query))
}

pub fn predict(req: Request, state: &AppState) -> ResultResp {
    let input: PredictionInput = read_json(req, state)?;

    match state.estimator.predict(&input) {
        Ok(prediction) => json_response(
            200,
            &PredictionResponse {
                prediction,
                formatted: format_rupiah(prediction),
            },
        ),
        Err(EstimateError::NotReady) => Err(ServerError::BadRequest(MSG_CANNOT_PREDICT.to_string())),
        Err(e) => Err(ServerError::InternalError(format!("Prediction failed: {e}"))),
    }
}

/// Answers a chat message. Property questions also get a few matching
/// listings from the search service.
pub fn chat(req: Request, state: &AppState) -> ResultResp {
    let form = read_form(req, state)?;
    let message = text(&form.fields, "message")
        .ok_or_else(|| ServerError::BadRequest("message is required".to_string()))?;

    let listings = state.store.load().unwrap_or_else(|e| {
        warn!(error = %e, "chat context without listings");
        Vec::new()
    });
    let response = state.assistant.reply(&message, &listings);

    let properties = is_property_related(&message).then(|| {
        let mut found = search(&state.store, &message).properties;
        found.truncate(CHAT_SUGGESTIONS);
        found
    });

    json_response(200, &ChatResponse { response, properties })
}
