// src/handlers/admin.rs

use crate::domain::NewListing;
use crate::errors::ServerError;
use crate::forms::parse_query;
use crate::handlers::read_form;
use crate::responses::{html_response, redirect, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{admin_page, notice_text, AdminVm};
use crate::upload::save_image;
use astra::Request;
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

pub fn dashboard(req: &Request, state: &AppState) -> ResultResp {
    let listings = state.store.load()?;
    let query = parse_query(req);

    let vm = AdminVm {
        listings: &listings,
        notice: query.get("notice").and_then(|code| notice_text(code)),
        model_ready: state.estimator.is_ready(),
    };
    html_response(admin_page(&vm))
}

/// Validates the form, stores the optional photo, appends the listing and
/// retrains the price model. The photo is removed again if the append fails.
pub fn add_property(req: Request, state: &AppState) -> ResultResp {
    let form = read_form(req, state)?;
    let new_listing = NewListing::from_form(&form.fields).map_err(ServerError::BadRequest)?;

    let image = form
        .file("image")
        .map(|file| save_image(&state.config.upload_dir, file))
        .transpose()?;

    let id = Uuid::new_v4().to_string();
    let stored_image = image.clone();
    let listing = new_listing.into_listing(id.clone(), image, Local::now().naive_local());
    if let Err(e) = state.store.append(listing) {
        if let Some(name) = stored_image {
            discard_image(&state.config.upload_dir.join(name));
        }
        return Err(e.into());
    }
    info!(%id, "property added");

    state.refresh_estimator();
    redirect("/admin?notice=added")
}

/// Removes a photo whose listing never made it into the store.
fn discard_image(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!(error = %e, path = %path.display(), "could not remove orphaned image");
    }
}

pub fn delete_property(state: &AppState, id: &str) -> ResultResp {
    if !state.store.delete(id)? {
        return redirect("/admin?notice=missing");
    }
    info!(id, "property deleted");

    state.refresh_estimator();
    redirect("/admin?notice=deleted")
}
