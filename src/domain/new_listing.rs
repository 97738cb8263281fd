// src/domain/new_listing.rs

use crate::domain::listing::{
    Certificate, Condition, Listing, ListingStatus, RoadType, DEFAULT_BATHROOMS, DEFAULT_BEDROOMS,
    DEFAULT_YEAR_BUILT,
};
use crate::forms::{number_or, optional_number, text, FormFields};
use chrono::NaiveDateTime;

/// Distances recorded when the admin leaves the field blank.
pub const DEFAULT_DISTANCE_SCHOOL: f64 = 1000.0;
pub const DEFAULT_DISTANCE_HOSPITAL: f64 = 2000.0;
pub const DEFAULT_DISTANCE_MARKET: f64 = 1500.0;

/// Validated contents of the admin "add property" form.
/// Blank fields have already been replaced by their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub land_area: f64,
    pub building_area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub carport: u32,
    pub year_built: i32,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance_school: f64,
    pub distance_hospital: f64,
    pub distance_market: f64,
    pub road_type: Option<RoadType>,
    pub condition: Option<Condition>,
    pub certificate: Option<Certificate>,
}

impl NewListing {
    /// Reads the submitted form fields. Returns a message naming the first
    /// field that is present but not a valid number.
    pub fn from_form(form: &FormFields) -> Result<Self, String> {
        Ok(Self {
            land_area: number_or(form, "luas_tanah", 0.0)?,
            building_area: number_or(form, "luas_bangunan", 0.0)?,
            bedrooms: number_or(form, "kamar_tidur", DEFAULT_BEDROOMS)?,
            bathrooms: number_or(form, "kamar_mandi", DEFAULT_BATHROOMS)?,
            carport: number_or(form, "carport", 0)?,
            year_built: number_or(form, "tahun_dibangun", DEFAULT_YEAR_BUILT)?,
            address: text(form, "alamat"),
            neighborhood: text(form, "kecamatan"),
            price: optional_number(form, "harga")?,
            latitude: optional_number(form, "latitude")?,
            longitude: optional_number(form, "longitude")?,
            distance_school: number_or(form, "jarak_sekolah", DEFAULT_DISTANCE_SCHOOL)?,
            distance_hospital: number_or(form, "jarak_rs", DEFAULT_DISTANCE_HOSPITAL)?,
            distance_market: number_or(form, "jarak_pasar", DEFAULT_DISTANCE_MARKET)?,
            road_type: text(form, "jenis_jalan").and_then(|s| RoadType::from_label(&s)),
            condition: text(form, "kondisi").and_then(|s| Condition::from_label(&s)),
            certificate: text(form, "sertifikat").and_then(|s| Certificate::from_label(&s)),
        })
    }

    /// Assigns identity and creation time, producing the record to persist.
    pub fn into_listing(self, id: String, image: Option<String>, now: NaiveDateTime) -> Listing {
        Listing {
            id,
            land_area: self.land_area,
            building_area: self.building_area,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            carport: self.carport,
            year_built: self.year_built,
            address: self.address,
            neighborhood: self.neighborhood,
            latitude: self.latitude,
            longitude: self.longitude,
            price: self.price,
            distance_school: Some(self.distance_school),
            distance_hospital: Some(self.distance_hospital),
            distance_market: Some(self.distance_market),
            road_type: self.road_type,
            condition: self.condition,
            certificate: self.certificate,
            image,
            created_at: now,
            status: ListingStatus::Available,
        }
    }
}
