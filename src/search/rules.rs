// src/search/rules.rs
//
// Rule tables for the query extractor. Matching logic lives in `extract.rs`;
// adding a phrase or a locale term only touches this file.

use crate::domain::{Certificate, Condition};
use crate::search::criteria::{Amenity, PricePreference, SizePreference};

/// Which criteria key a numeric rule fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberField {
    Budget,
    Bedrooms,
    Bathrooms,
    MinLandArea,
    MinBuildingArea,
    MinCarport,
}

/// How a captured number is turned into the stored value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnitude {
    Times(f64),
    /// Bare number after a budget keyword: "budget 500" means 500 juta, but
    /// "harga 750.000.000" is already in rupiah.
    ImpliedMillions,
}

impl Magnitude {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Magnitude::Times(factor) => value * factor,
            Magnitude::ImpliedMillions if value < MILLION => value * MILLION,
            Magnitude::ImpliedMillions => value,
        }
    }
}

pub const MILLION: f64 = 1_000_000.0;
pub const BILLION: f64 = 1_000_000_000.0;

/// One pattern of a numeric category. `pattern` has exactly one capture group
/// holding the number. A match is discarded when `not_followed_by` matches the
/// text right after it, or `not_preceded_by` matches the text right before it.
pub struct NumberRule {
    pub pattern: &'static str,
    pub not_followed_by: Option<&'static str>,
    pub not_preceded_by: Option<&'static str>,
    pub magnitude: Magnitude,
}

pub struct NumberCategory {
    pub field: NumberField,
    pub rules: &'static [NumberRule],
}

const fn rule(pattern: &'static str) -> NumberRule {
    scaled(pattern, Magnitude::Times(1.0))
}

const fn scaled(pattern: &'static str, magnitude: Magnitude) -> NumberRule {
    NumberRule {
        pattern,
        not_followed_by: None,
        not_preceded_by: None,
        magnitude,
    }
}

impl NumberRule {
    const fn unless_followed_by(self, guard: &'static str) -> Self {
        NumberRule {
            not_followed_by: Some(guard),
            ..self
        }
    }

    const fn unless_preceded_by(self, guard: &'static str) -> Self {
        NumberRule {
            not_preceded_by: Some(guard),
            ..self
        }
    }
}

/// An area, distance or amenity word right before the number: "tanah 150m"
/// and "dekat pasar 500m" are meters, not juta.
const AREA_OR_DISTANCE_BEFORE: &str = r"\b(?:luas|tanah|lt|bangunan|lb|land|building|area|jarak|dekat|deket|dkt|near|sekolah|school|sakit|rs|hospital|pasar|market)\s*(?:min(?:imal|imum)?\s*)?$";

/// Square or distance markers right after a compact "m".
const AREA_OR_DISTANCE_AFTER: &str = r"^(?:²|\s*(?:persegi|tanah|bangunan|land|building|dari|ke|from|to)\b)";

/// A bathroom qualifier that owns the number after it ("kamar mandi 2 kamar
/// tidur 3"). A number before the qualifier means it already has one.
const BATHROOM_QUALIFIER_BEFORE: &str =
    r"(?:^|[^\d.,\s])\s*\b(?:kamar\s*mandi|kmr\s*mandi|km|bathrooms?|bath|wc)\s*$";

/// Same for bedroom qualifiers ahead of a bathroom count.
const BEDROOM_QUALIFIER_BEFORE: &str =
    r"(?:^|[^\d.,\s])\s*\b(?:kamar\s*tidur|kmr\s*tidur|kt|bedrooms?|br|bed|kamar|kmr)\s*$";

/// Categories in evaluation order. Within a category the first rule with an
/// accepted match wins, so more specific phrasings come first.
pub const NUMBER_CATEGORIES: &[NumberCategory] = &[
    NumberCategory {
        field: NumberField::Budget,
        rules: &[
            scaled(r"(\d+(?:[.,]\d+)*)\s*(?:miliar|milyar|billion|bn)\b", Magnitude::Times(BILLION)),
            scaled(r"(\d+(?:[.,]\d+)*)\s*(?:juta|jt|million)\b", Magnitude::Times(MILLION)),
            // compact "500m" only; "500 m" is more likely meters
            scaled(r"(\d+(?:[.,]\d+)*)m\b", Magnitude::Times(MILLION))
                .unless_followed_by(AREA_OR_DISTANCE_AFTER)
                .unless_preceded_by(AREA_OR_DISTANCE_BEFORE),
            scaled(
                r"\b(?:budget|bujet|harga|price|dana)\s*(?:sekitar|kisaran|maksimal|maks|max|around)?\s*(?:rp\.?\s*)?(\d+(?:[.,]\d+)*)",
                Magnitude::ImpliedMillions,
            ),
            scaled(r"\brp\.?\s*(\d+(?:[.,]\d+)*)", Magnitude::ImpliedMillions),
        ],
    },
    NumberCategory {
        field: NumberField::Bedrooms,
        rules: &[
            rule(r"(\d+)\s*(?:kamar\s*tidur|kmr\s*tidur|kt|bedrooms?|br|bed)\b")
                .unless_preceded_by(BATHROOM_QUALIFIER_BEFORE),
            rule(r"(\d+)\s*(?:kamar|kmr)\b")
                .unless_followed_by(r"^\s*mandi\b")
                .unless_preceded_by(BATHROOM_QUALIFIER_BEFORE),
            rule(r"\b(?:kamar\s*tidur|kmr\s*tidur|kt|bedrooms?)\s*(\d+)\b"),
            rule(r"\b(?:kamar|kmr)\s*(\d+)\b"),
        ],
    },
    NumberCategory {
        field: NumberField::Bathrooms,
        rules: &[
            rule(r"(\d+)\s*(?:kamar\s*mandi|kmr\s*mandi|km|bathrooms?|bath|wc)\b")
                .unless_preceded_by(BEDROOM_QUALIFIER_BEFORE),
            rule(r"\b(?:kamar\s*mandi|kmr\s*mandi|km|bathrooms?|wc)\s*(\d+)\b"),
        ],
    },
    NumberCategory {
        field: NumberField::MinLandArea,
        rules: &[
            rule(r"\b(?:luas\s*tanah|tanah|lt|land(?:\s*area)?)\s*(?:min(?:imal|imum)?\s*)?(\d+(?:[.,]\d+)?)"),
            rule(r"(\d+(?:[.,]\d+)?)\s*(?:m2|m²|meter\s*persegi|meter|sqm)\s*(?:luas\s*)?(?:tanah|land)\b"),
        ],
    },
    NumberCategory {
        field: NumberField::MinBuildingArea,
        rules: &[
            rule(r"\b(?:luas\s*bangunan|bangunan|lb|building(?:\s*area)?)\s*(?:min(?:imal|imum)?\s*)?(\d+(?:[.,]\d+)?)"),
            rule(r"(\d+(?:[.,]\d+)?)\s*(?:m2|m²|meter\s*persegi|meter|sqm)\s*(?:luas\s*)?(?:bangunan|building)\b"),
        ],
    },
    NumberCategory {
        field: NumberField::MinCarport,
        rules: &[
            rule(r"(\d+)\s*(?:carports?|car\s*port|garasi|garage)\b"),
            rule(r"\b(?:carports?|car\s*port|garasi|garage)\s*(\d+)\b"),
            rule(r"\b(?:muat|parkir)\s*(\d+)\s*mobil\b"),
        ],
    },
];

/// A keyword table entry: any phrase present selects `value`.
pub struct KeywordSet<T: 'static> {
    pub value: T,
    pub keywords: &'static [&'static str],
}

pub struct AmenityRule {
    pub amenity: Amenity,
    /// Meters. Fixed policy, not derived from data.
    pub max_distance: f64,
    pub keywords: &'static [&'static str],
}

pub const AMENITIES: &[AmenityRule] = &[
    AmenityRule {
        amenity: Amenity::School,
        max_distance: 500.0,
        keywords: &["dekat sekolah", "deket sekolah", "dkt sekolah", "near school", "close to school", "sekolah", "school"],
    },
    AmenityRule {
        amenity: Amenity::Hospital,
        max_distance: 1000.0,
        keywords: &[
            "dekat rumah sakit",
            "deket rumah sakit",
            "dekat rs",
            "deket rs",
            "dkt rs",
            "near hospital",
            "rumah sakit",
            "hospital",
        ],
    },
    AmenityRule {
        amenity: Amenity::Market,
        max_distance: 800.0,
        keywords: &["dekat pasar", "deket pasar", "dkt pasar", "near market", "pasar", "market"],
    },
];

/// Checked in order; first category with a hit wins.
pub const CONDITIONS: &[KeywordSet<Condition>] = &[
    KeywordSet {
        value: Condition::Baru,
        keywords: &["baru", "gres", "new", "brand new"],
    },
    KeywordSet {
        value: Condition::Baik,
        keywords: &["baik", "bagus", "terawat", "good", "well maintained"],
    },
    KeywordSet {
        value: Condition::ButuhRenovasi,
        keywords: &["butuh renovasi", "perlu renovasi", "renovasi", "needs renovation", "renovation", "fixer upper"],
    },
];

pub const CERTIFICATES: &[KeywordSet<Certificate>] = &[
    KeywordSet {
        value: Certificate::Shm,
        keywords: &["shm", "sertifikat hak milik", "hak milik"],
    },
    KeywordSet {
        value: Certificate::Hgb,
        keywords: &["hgb", "hak guna bangunan"],
    },
];

pub const PRICE_PREFERENCES: &[KeywordSet<PricePreference>] = &[
    KeywordSet {
        value: PricePreference::Low,
        keywords: &["murah", "termurah", "ekonomis", "terjangkau", "cheap", "cheapest", "affordable"],
    },
    KeywordSet {
        value: PricePreference::High,
        keywords: &["mahal", "termahal", "mewah", "expensive", "luxury", "premium"],
    },
];

// "luas" is deliberately absent: it is the area qualifier in "luas tanah".
pub const SIZE_PREFERENCES: &[KeywordSet<SizePreference>] = &[
    KeywordSet {
        value: SizePreference::Large,
        keywords: &["besar", "terbesar", "lega", "big", "large", "spacious"],
    },
    KeywordSet {
        value: SizePreference::Small,
        keywords: &["kecil", "mungil", "minimalis", "small", "compact"],
    },
];

/// Closed list of sub-districts the listings are spread over.
pub const NEIGHBORHOODS: &[&str] = &[
    "Banguntapan",
    "Berbah",
    "Depok",
    "Gamping",
    "Godean",
    "Gondokusuman",
    "Jetis",
    "Kalasan",
    "Kasihan",
    "Kotagede",
    "Mergangsan",
    "Mlati",
    "Ngaglik",
    "Sewon",
    "Umbulharjo",
    "Wirobrajan",
];

/// Conversational filler dropped before matching. `unless_next` keeps the
/// word when the following token is part of a phrase we match on.
pub struct Filler {
    pub word: &'static str,
    pub unless_next: Option<&'static str>,
}

const fn filler(word: &'static str) -> Filler {
    Filler {
        word,
        unless_next: None,
    }
}

pub const FILLERS: &[Filler] = &[
    // particles and questions
    filler("apa"),
    filler("apakah"),
    filler("ada"),
    filler("adakah"),
    filler("dong"),
    filler("ya"),
    filler("sih"),
    filler("deh"),
    filler("nih"),
    filler("tolong"),
    filler("mohon"),
    // who / wants
    filler("saya"),
    filler("aku"),
    filler("mau"),
    filler("ingin"),
    filler("pengen"),
    filler("cari"),
    filler("carikan"),
    filler("mencari"),
    // connectors
    filler("yang"),
    filler("yg"),
    filler("dengan"),
    filler("dgn"),
    filler("punya"),
    filler("untuk"),
    filler("di"),
    // the thing itself
    Filler {
        word: "rumah",
        unless_next: Some("sakit"),
    },
    filler("properti"),
    filler("property"),
    filler("house"),
    filler("which"),
    filler("with"),
    filler("that"),
    filler("looking"),
    filler("for"),
    filler("find"),
    filler("please"),
    filler("the"),
    filler("a"),
];

/// Words that mark a message as a property question rather than small talk.
pub const PROPERTY_KEYWORDS: &[&str] = &[
    "rumah", "juta", "miliar", "kamar", "budget", "harga", "luas", "tanah", "sekolah", "hospital", "pasar",
    "properti", "beli", "cari", "house", "bedroom", "bathroom", "price", "search",
];
