// src/search/service.rs

use crate::db::{ListingStore, StoreError};
use crate::domain::{format_rupiah, Listing};
use crate::search::criteria::{Amenity, Criteria, PricePreference, SizePreference};
use crate::search::{extract_criteria, filter_strict};
use serde::Serialize;
use tracing::{info, warn};

pub const FEATURED_COUNT: usize = 6;
pub const FALLBACK_COUNT: usize = 5;

pub const MSG_RECENT: &str = "Menampilkan beberapa properti terbaru.";
pub const MSG_SEARCH_FAILED: &str = "Terjadi kesalahan dalam pencarian. Menampilkan properti terbaru.";

/// What a search hands back to the page or the JSON API.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub properties: Vec<Listing>,
    pub explanation: String,
    /// False when the result is a default subset rather than a parsed query.
    pub ai_powered: bool,
    pub criteria: Criteria,
}

/// Runs a free-text search against the store. Always returns something:
/// a store failure degrades to the most recent listings plus an explanation.
pub fn search(store: &ListingStore, query: &str) -> SearchOutcome {
    let query = query.trim();

    if query.is_empty() {
        return SearchOutcome {
            properties: store.recent(FEATURED_COUNT).unwrap_or_else(|e| {
                warn!(error = %e, "could not load recent listings");
                Vec::new()
            }),
            explanation: MSG_RECENT.to_string(),
            ai_powered: false,
            criteria: Criteria::default(),
        };
    }

    match try_search(store, query) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, query, "search failed, falling back to recent listings");
            SearchOutcome {
                properties: store.recent(FALLBACK_COUNT).unwrap_or_default(),
                explanation: MSG_SEARCH_FAILED.to_string(),
                ai_powered: false,
                criteria: Criteria::default(),
            }
        }
    }
}

fn try_search(store: &ListingStore, query: &str) -> Result<SearchOutcome, StoreError> {
    let criteria = extract_criteria(query);
    let listings = store.load()?;
    let total = listings.len();
    let properties = filter_strict(listings, &criteria);

    info!(query, total, matched = properties.len(), "search");

    Ok(SearchOutcome {
        explanation: explain(&criteria, properties.len()),
        properties,
        ai_powered: true,
        criteria,
    })
}

/// Indonesian summary of what was understood from the query.
pub fn explain(criteria: &Criteria, matched: usize) -> String {
    if criteria.is_empty() {
        return format!(
            "Tidak ada kriteria khusus yang dikenali. Menampilkan semua {matched} properti."
        );
    }

    let parts = describe(criteria);
    if matched == 0 {
        format!(
            "Tidak ada properti yang persis cocok dengan kriteria: {}.",
            parts.join(", ")
        )
    } else {
        format!("Ditemukan {matched} properti dengan kriteria: {}.", parts.join(", "))
    }
}

fn describe(c: &Criteria) -> Vec<String> {
    let mut parts = Vec::new();

    if let Some(n) = c.bedrooms {
        parts.push(format!("{n} kamar tidur"));
    }
    if let Some(n) = c.bathrooms {
        parts.push(format!("{n} kamar mandi"));
    }
    if let Some(b) = &c.budget {
        parts.push(format!("harga {} - {}", format_rupiah(b.min), format_rupiah(b.max)));
    }
    if let Some(m) = c.min_land_area {
        parts.push(format!("luas tanah minimal {m} m²"));
    }
    if let Some(m) = c.min_building_area {
        parts.push(format!("luas bangunan minimal {m} m²"));
    }
    if let Some(n) = c.min_carport {
        parts.push(format!("minimal {n} carport"));
    }
    for (limit, amenity) in [
        (c.max_distance_school, Amenity::School),
        (c.max_distance_hospital, Amenity::Hospital),
        (c.max_distance_market, Amenity::Market),
    ] {
        if let Some(max) = limit {
            parts.push(format!("dekat {} (maks {max} m)", amenity.display_name()));
        }
    }
    if let Some(cond) = c.condition {
        parts.push(format!("kondisi {}", cond.display_name().to_lowercase()));
    }
    if let Some(cert) = c.certificate {
        parts.push(format!("sertifikat {}", cert.label()));
    }
    if let Some(area) = &c.neighborhood {
        parts.push(format!("di {area}"));
    }
    match c.price_preference {
        Some(PricePreference::Low) => parts.push("diurutkan dari termurah".to_string()),
        Some(PricePreference::High) => parts.push("diurutkan dari termahal".to_string()),
        None => {}
    }
    match c.size_preference {
        Some(SizePreference::Large) => parts.push("diurutkan dari terluas".to_string()),
        Some(SizePreference::Small) => parts.push("diurutkan dari terkecil".to_string()),
        None => {}
    }

    parts
}
