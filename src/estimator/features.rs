// src/estimator/features.rs

use crate::domain::new_listing::{DEFAULT_DISTANCE_HOSPITAL, DEFAULT_DISTANCE_MARKET, DEFAULT_DISTANCE_SCHOOL};
use crate::domain::{Certificate, Condition, Listing, RoadType};
use crate::forms::{optional_number, text, FormFields};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Column order of every feature vector the model sees.
pub const FEATURE_NAMES: [&str; 12] = [
    "luas_tanah",
    "luas_bangunan",
    "kamar_tidur",
    "kamar_mandi",
    "carport",
    "tahun_dibangun",
    "jarak_sekolah",
    "jarak_rs",
    "jarak_pasar",
    "jenis_jalan_encoded",
    "kondisi_encoded",
    "sertifikat_encoded",
];

pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

pub type Features = [f64; FEATURE_COUNT];

/// Attributes of a property to price. Every field is optional; missing ones
/// fall back to a typical house (100 m² land, 80 m² building, 2 bedrooms...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PredictionInput {
    #[serde(default, deserialize_with = "loose_number")]
    pub luas_tanah: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub luas_bangunan: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub kamar_tidur: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub kamar_mandi: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub carport: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub tahun_dibangun: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub jarak_sekolah: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub jarak_rs: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub jarak_pasar: Option<f64>,
    #[serde(default)]
    pub jenis_jalan: Option<String>,
    #[serde(default)]
    pub kondisi: Option<String>,
    #[serde(default)]
    pub sertifikat: Option<String>,
}

impl PredictionInput {
    pub fn from_form(form: &FormFields) -> Result<Self, String> {
        Ok(Self {
            luas_tanah: optional_number(form, "luas_tanah")?,
            luas_bangunan: optional_number(form, "luas_bangunan")?,
            kamar_tidur: optional_number(form, "kamar_tidur")?,
            kamar_mandi: optional_number(form, "kamar_mandi")?,
            carport: optional_number(form, "carport")?,
            tahun_dibangun: optional_number(form, "tahun_dibangun")?,
            jarak_sekolah: optional_number(form, "jarak_sekolah")?,
            jarak_rs: optional_number(form, "jarak_rs")?,
            jarak_pasar: optional_number(form, "jarak_pasar")?,
            jenis_jalan: text(form, "jenis_jalan"),
            kondisi: text(form, "kondisi"),
            sertifikat: text(form, "sertifikat"),
        })
    }

    pub fn features(&self) -> Features {
        [
            self.luas_tanah.unwrap_or(100.0),
            self.luas_bangunan.unwrap_or(80.0),
            self.kamar_tidur.unwrap_or(2.0),
            self.kamar_mandi.unwrap_or(1.0),
            self.carport.unwrap_or(0.0),
            self.tahun_dibangun.unwrap_or(2020.0),
            self.jarak_sekolah.unwrap_or(DEFAULT_DISTANCE_SCHOOL),
            self.jarak_rs.unwrap_or(DEFAULT_DISTANCE_HOSPITAL),
            self.jarak_pasar.unwrap_or(DEFAULT_DISTANCE_MARKET),
            encode(self.jenis_jalan.as_deref().and_then(RoadType::from_label).map(RoadType::code)),
            encode(self.kondisi.as_deref().and_then(Condition::from_label).map(Condition::code)),
            encode(self.sertifikat.as_deref().and_then(Certificate::from_label).map(Certificate::code)),
        ]
    }
}

/// Feature row for a stored listing.
pub fn listing_features(l: &Listing) -> Features {
    [
        l.land_area,
        l.building_area,
        f64::from(l.bedrooms),
        f64::from(l.bathrooms),
        f64::from(l.carport),
        f64::from(l.year_built),
        l.distance_school.unwrap_or(DEFAULT_DISTANCE_SCHOOL),
        l.distance_hospital.unwrap_or(DEFAULT_DISTANCE_HOSPITAL),
        l.distance_market.unwrap_or(DEFAULT_DISTANCE_MARKET),
        encode(l.road_type.map(RoadType::code)),
        encode(l.condition.map(Condition::code)),
        encode(l.certificate.map(Certificate::code)),
    ]
}

/// Unknown category encodes to 0.
fn encode(code: Option<f64>) -> f64 {
    code.unwrap_or(0.0)
}

/// Accepts `120`, `"120"`, `""` and `null`: forms post strings, API clients
/// post numbers.
fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {s:?}"))),
        Some(other) => Err(serde::de::Error::custom(format!("expected a number, got {other}"))),
    }
}
