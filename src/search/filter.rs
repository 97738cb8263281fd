// src/search/filter.rs

use crate::domain::Listing;
use crate::search::criteria::{Criteria, PricePreference, SizePreference};
use std::cmp::Ordering;

/// Distance assumed for a listing that never recorded one. Larger than any
/// proximity threshold, so such listings never pass a "near X" constraint.
pub const MISSING_DISTANCE: f64 = f64::INFINITY;

/// Applies `criteria` to `listings`, keeping only records that satisfy every
/// present constraint, then orders them by the preference keys.
///
/// Exact keys (rooms, condition, certificate, neighborhood) use equality:
/// a query for 2 bedrooms never returns a 3-bedroom house. An empty criteria
/// returns the input untouched.
pub fn filter_strict(listings: Vec<Listing>, criteria: &Criteria) -> Vec<Listing> {
    if criteria.is_empty() {
        return listings;
    }

    let mut kept: Vec<Listing> = listings.into_iter().filter(|l| matches(l, criteria)).collect();

    // Vec::sort_by is stable, so ties keep collection order. Size runs second
    // and wins when both preferences are set.
    match criteria.price_preference {
        Some(PricePreference::Low) => kept.sort_by(|a, b| cmp_f64(price_or(a, f64::INFINITY), price_or(b, f64::INFINITY))),
        Some(PricePreference::High) => kept.sort_by(|a, b| cmp_f64(price_or(b, 0.0), price_or(a, 0.0))),
        None => {}
    }
    match criteria.size_preference {
        Some(SizePreference::Large) => kept.sort_by(|a, b| cmp_f64(b.total_area(), a.total_area())),
        Some(SizePreference::Small) => kept.sort_by(|a, b| cmp_f64(a.total_area(), b.total_area())),
        None => {}
    }

    kept
}

fn matches(listing: &Listing, c: &Criteria) -> bool {
    if c.bedrooms.is_some_and(|n| listing.bedrooms != n) {
        return false;
    }
    if c.bathrooms.is_some_and(|n| listing.bathrooms != n) {
        return false;
    }

    if c.min_land_area.is_some_and(|min| listing.land_area < min) {
        return false;
    }
    if c.min_building_area.is_some_and(|min| listing.building_area < min) {
        return false;
    }
    if c.min_carport.is_some_and(|min| listing.carport < min) {
        return false;
    }

    if let Some(budget) = &c.budget {
        match listing.priced() {
            Some(price) if budget.contains(price) => {}
            _ => return false,
        }
    }

    let within = |limit: Option<f64>, distance: Option<f64>| {
        limit.map_or(true, |max| distance.unwrap_or(MISSING_DISTANCE) <= max)
    };
    if !within(c.max_distance_school, listing.distance_school)
        || !within(c.max_distance_hospital, listing.distance_hospital)
        || !within(c.max_distance_market, listing.distance_market)
    {
        return false;
    }

    if c.condition.is_some() && listing.condition != c.condition {
        return false;
    }
    if c.certificate.is_some() && listing.certificate != c.certificate {
        return false;
    }
    if let Some(wanted) = &c.neighborhood {
        let same = listing
            .neighborhood
            .as_deref()
            .is_some_and(|n| n.trim().eq_ignore_ascii_case(wanted.trim()));
        if !same {
            return false;
        }
    }

    true
}

fn price_or(listing: &Listing, default: f64) -> f64 {
    listing.price.unwrap_or(default)
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
