// src/search/criteria.rs

use crate::domain::{Certificate, Condition};
use serde::Serialize;

/// Structured filter parsed out of one free-text query.
///
/// Every field is optional: a key is only present when the extractor found a
/// matching phrase. An empty `Criteria` means "no filtering".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Criteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_land_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_building_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_carport: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance_school: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance_hospital: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance_market: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Certificate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_preference: Option<PricePreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_preference: Option<SizePreference>,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        *self == Criteria::default()
    }

    pub fn set_max_distance(&mut self, amenity: Amenity, meters: f64) {
        match amenity {
            Amenity::School => self.max_distance_school = Some(meters),
            Amenity::Hospital => self.max_distance_hospital = Some(meters),
            Amenity::Market => self.max_distance_market = Some(meters),
        }
    }
}

/// Budget point in rupiah plus the inclusive ±20% band derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Budget {
    pub point: f64,
    pub min: f64,
    pub max: f64,
}

impl Budget {
    pub fn around(point: f64) -> Self {
        // *8/10 rather than *0.8 keeps round budgets exact
        Self {
            point,
            min: point * 8.0 / 10.0,
            max: point * 12.0 / 10.0,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePreference {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePreference {
    Large,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    School,
    Hospital,
    Market,
}

impl Amenity {
    pub fn display_name(self) -> &'static str {
        match self {
            Amenity::School => "sekolah",
            Amenity::Hospital => "rumah sakit",
            Amenity::Market => "pasar",
        }
    }
}
