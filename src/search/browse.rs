// src/search/browse.rs

use crate::domain::Listing;
use crate::forms::FormFields;

/// The plain filters on the listings page. Zero or unparsable values mean
/// "no filter", matching how the form submits empty inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilters {
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub bedrooms: Option<u32>,
}

impl PropertyFilters {
    pub fn from_query(query: &FormFields) -> Self {
        Self {
            budget_min: positive(query, "budget_min"),
            budget_max: positive(query, "budget_max"),
            bedrooms: positive(query, "kamar_tidur").map(|n| n as u32),
        }
    }

    /// Unpriced listings count as price 0 here: they fail a minimum and pass
    /// a maximum.
    pub fn matches(&self, listing: &Listing) -> bool {
        let price = listing.price.unwrap_or(0.0);

        self.budget_min.map_or(true, |min| price >= min)
            && self.budget_max.map_or(true, |max| price <= max)
            && self.bedrooms.map_or(true, |n| listing.bedrooms >= n)
    }

    pub fn apply(&self, listings: Vec<Listing>) -> Vec<Listing> {
        listings.into_iter().filter(|l| self.matches(l)).collect()
    }
}

fn positive(query: &FormFields, key: &str) -> Option<f64> {
    query
        .get(key)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| *v > 0.0)
        .map(f64::trunc)
}
