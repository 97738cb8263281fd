// src/handlers/pages.rs

use crate::domain::format_rupiah;
use crate::estimator::{EstimateError, PredictionInput};
use crate::forms::{parse_query, text};
use crate::handlers::read_form;
use crate::responses::{html_response, redirect, ResultResp};
use crate::search::service::FEATURED_COUNT;
use crate::search::{search, PropertyFilters};
use crate::state::AppState;
use crate::templates::pages::{self, PredictOutcome};
use astra::Request;

/// Listings shown under a detail page.
pub const OTHER_LISTINGS: usize = 3;

pub fn home(state: &AppState) -> ResultResp {
    let mut listings = state.store.load()?;
    listings.truncate(FEATURED_COUNT);
    html_response(pages::home_page(&listings))
}

pub fn properties(req: &Request, state: &AppState) -> ResultResp {
    let filters = PropertyFilters::from_query(&parse_query(req));
    let listings = filters.apply(state.store.load()?);
    html_response(pages::properties_page(&listings, &filters))
}

/// Unknown ids go back to the listings page.
pub fn detail(state: &AppState, id: &str) -> ResultResp {
    let listings = state.store.load()?;

    let Some(listing) = listings.iter().find(|l| l.id == id) else {
        return redirect("/properties");
    };
    let others: Vec<_> = listings
        .iter()
        .filter(|l| l.id != id)
        .take(OTHER_LISTINGS)
        .cloned()
        .collect();

    html_response(pages::detail_page(listing, &others))
}

pub fn search_results(req: &Request, state: &AppState) -> ResultResp {
    let query = text(&parse_query(req), "q").unwrap_or_default();
    let outcome = search(&state.store, &query);
    html_response(pages::search_page(&query, &outcome))
}

pub fn predict_form() -> ResultResp {
    html_response(pages::predict_page(None))
}

pub fn predict_submit(req: Request, state: &AppState) -> ResultResp {
    let form = read_form(req, state)?;

    let outcome = match PredictionInput::from_form(&form.fields) {
        Err(msg) => PredictOutcome::Invalid(msg),
        Ok(input) => match state.estimator.predict(&input) {
            Ok(price) => PredictOutcome::Estimate(format_rupiah(price)),
            Err(EstimateError::NotReady) => PredictOutcome::NotReady,
            Err(e) => PredictOutcome::Invalid(e.to_string()),
        },
    };

    html_response(pages::predict_page(Some(&outcome)))
}

pub fn chat() -> ResultResp {
    html_response(pages::chat_page())
}
