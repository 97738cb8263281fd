// src/domain/listing.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BEDROOMS: u32 = 2;
pub const DEFAULT_BATHROOMS: u32 = 1;
pub const DEFAULT_YEAR_BUILT: i32 = 2020;

/// A single property record as persisted in the listing store.
///
/// Field names on disk keep the labels the store file has always used
/// (`luas_tanah`, `kamar_tidur`, ...), so older data files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,

    // Structure
    #[serde(rename = "luas_tanah", default)]
    pub land_area: f64,
    #[serde(rename = "luas_bangunan", default)]
    pub building_area: f64,
    #[serde(rename = "kamar_tidur", default = "default_bedrooms")]
    pub bedrooms: u32,
    #[serde(rename = "kamar_mandi", default = "default_bathrooms")]
    pub bathrooms: u32,
    #[serde(default)]
    pub carport: u32,
    #[serde(rename = "tahun_dibangun", default = "default_year_built")]
    pub year_built: i32,

    // Location
    #[serde(rename = "alamat", default)]
    pub address: Option<String>,
    #[serde(rename = "kecamatan", default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Unset for unpriced/reference listings.
    #[serde(rename = "harga", default)]
    pub price: Option<f64>,

    // Distances in meters
    #[serde(rename = "jarak_sekolah", default)]
    pub distance_school: Option<f64>,
    #[serde(rename = "jarak_rs", default)]
    pub distance_hospital: Option<f64>,
    #[serde(rename = "jarak_pasar", default)]
    pub distance_market: Option<f64>,

    // Categories
    #[serde(rename = "jenis_jalan", default)]
    pub road_type: Option<RoadType>,
    #[serde(rename = "kondisi", default)]
    pub condition: Option<Condition>,
    #[serde(rename = "sertifikat", default)]
    pub certificate: Option<Certificate>,

    #[serde(default)]
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub status: ListingStatus,
}

fn default_bedrooms() -> u32 {
    DEFAULT_BEDROOMS
}

fn default_bathrooms() -> u32 {
    DEFAULT_BATHROOMS
}

fn default_year_built() -> i32 {
    DEFAULT_YEAR_BUILT
}

impl Listing {
    /// Land plus building area, the key used by size-preference ordering.
    pub fn total_area(&self) -> f64 {
        self.land_area + self.building_area
    }

    /// A priced listing has a recorded, non-zero price.
    pub fn priced(&self) -> Option<f64> {
        self.price.filter(|p| *p > 0.0)
    }

    pub fn title(&self) -> String {
        match (&self.address, &self.neighborhood) {
            (Some(addr), _) if !addr.trim().is_empty() => addr.clone(),
            (_, Some(area)) => format!("Rumah di {area}"),
            _ => format!("Rumah {} kamar tidur", self.bedrooms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadType {
    GangKecil,
    JalanSedang,
    JalanBesar,
}

impl RoadType {
    pub const ALL: [RoadType; 3] = [RoadType::GangKecil, RoadType::JalanSedang, RoadType::JalanBesar];

    pub fn label(self) -> &'static str {
        match self {
            RoadType::GangKecil => "gang_kecil",
            RoadType::JalanSedang => "jalan_sedang",
            RoadType::JalanBesar => "jalan_besar",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RoadType::GangKecil => "Gang kecil",
            RoadType::JalanSedang => "Jalan sedang",
            RoadType::JalanBesar => "Jalan besar",
        }
    }

    /// Ordinal used as a model feature.
    pub fn code(self) -> f64 {
        match self {
            RoadType::GangKecil => 1.0,
            RoadType::JalanSedang => 2.0,
            RoadType::JalanBesar => 3.0,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    ButuhRenovasi,
    RenovasiRingan,
    Baik,
    Baru,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Baru,
        Condition::Baik,
        Condition::RenovasiRingan,
        Condition::ButuhRenovasi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condition::ButuhRenovasi => "butuh_renovasi",
            Condition::RenovasiRingan => "renovasi_ringan",
            Condition::Baik => "baik",
            Condition::Baru => "baru",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Condition::ButuhRenovasi => "Butuh renovasi",
            Condition::RenovasiRingan => "Renovasi ringan",
            Condition::Baik => "Baik",
            Condition::Baru => "Baru",
        }
    }

    pub fn code(self) -> f64 {
        match self {
            Condition::ButuhRenovasi => 1.0,
            Condition::RenovasiRingan => 2.0,
            Condition::Baik => 3.0,
            Condition::Baru => 4.0,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Certificate {
    #[serde(rename = "lainnya")]
    Lainnya,
    #[serde(rename = "HGB")]
    Hgb,
    #[serde(rename = "SHM")]
    Shm,
}

impl Certificate {
    pub const ALL: [Certificate; 3] = [Certificate::Shm, Certificate::Hgb, Certificate::Lainnya];

    pub fn label(self) -> &'static str {
        match self {
            Certificate::Lainnya => "lainnya",
            Certificate::Hgb => "HGB",
            Certificate::Shm => "SHM",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Certificate::Lainnya => "Lainnya",
            Certificate::Hgb => "HGB (Hak Guna Bangunan)",
            Certificate::Shm => "SHM (Sertifikat Hak Milik)",
        }
    }

    pub fn code(self) -> f64 {
        match self {
            Certificate::Lainnya => 1.0,
            Certificate::Hgb => 2.0,
            Certificate::Shm => 3.0,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Available,
    Sold,
}

impl ListingStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            ListingStatus::Available => "Tersedia",
            ListingStatus::Sold => "Terjual",
        }
    }
}

/// "Rp 1,234,567" with thousands separators, rounded to whole rupiah.
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round().max(0.0) as u64;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("Rp {out}")
}
