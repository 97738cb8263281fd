use crate::assistant::{Assistant, AssistantError, LanguageModel};
use crate::config::Config;
use crate::db::ListingStore;
use crate::domain::{Certificate, Condition, Listing, ListingStatus, RoadType};
use crate::estimator::PriceEstimator;
use crate::state::AppState;
use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::Mutex;
use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique, not-yet-existing path under the OS temp dir.
pub fn temp_path(prefix: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    env::temp_dir().join(format!(
        "rumah_finder_{prefix}_{}_{nanos}_{n}.{ext}",
        std::process::id()
    ))
}

pub fn created(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day.clamp(1, 28))
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

/// An ordinary priced house: 100/80 m², 2 bedrooms, Rp 500 juta, SHM, baik.
pub fn listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        land_area: 100.0,
        building_area: 80.0,
        bedrooms: 2,
        bathrooms: 1,
        carport: 1,
        year_built: 2018,
        address: Some(format!("Jl. Kaliurang No. {id}")),
        neighborhood: Some("Depok".to_string()),
        latitude: None,
        longitude: None,
        price: Some(500_000_000.0),
        distance_school: Some(1000.0),
        distance_hospital: Some(2000.0),
        distance_market: Some(1500.0),
        road_type: Some(RoadType::JalanSedang),
        condition: Some(Condition::Baik),
        certificate: Some(Certificate::Shm),
        image: None,
        created_at: created(1),
        status: ListingStatus::Available,
    }
}

/// `n` priced listings whose price grows with land area.
pub fn priced_listings(n: usize) -> Vec<Listing> {
    (0..n)
        .map(|i| {
            let mut l = listing(&format!("p{i}"));
            l.land_area = 60.0 + 30.0 * i as f64;
            l.building_area = 45.0 + 20.0 * (i % 3) as f64;
            l.bedrooms = 2 + (i % 3) as u32;
            l.price = Some(l.land_area * 4_500_000.0 + l.building_area * 2_000_000.0);
            l.created_at = created(1 + i as u32);
            l
        })
        .collect()
}

enum FakeReply {
    Answer(String),
    Silent,
    Fail,
}

/// Scripted chat backend that records every prompt it receives.
pub struct FakeModel {
    reply: FakeReply,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeModel {
    pub fn answering(text: &str) -> Self {
        Self::with(FakeReply::Answer(text.to_string()))
    }

    pub fn silent() -> Self {
        Self::with(FakeReply::Silent)
    }

    pub fn failing() -> Self {
        Self::with(FakeReply::Fail)
    }

    fn with(reply: FakeReply) -> Self {
        Self {
            reply,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

impl LanguageModel for FakeModel {
    fn generate(&self, prompt: &str) -> Result<Option<String>, AssistantError> {
        self.prompts.lock().push(prompt.to_string());
        match &self.reply {
            FakeReply::Answer(text) => Ok(Some(text.clone())),
            FakeReply::Silent => Ok(None),
            FakeReply::Fail => Err(AssistantError::RequestFailed("connection refused".into())),
        }
    }
}

/// App state over throwaway files, seeded with `listings`. The estimator is
/// trained from them the same way startup does.
pub fn test_state(listings: &[Listing]) -> AppState {
    let root = temp_path("app", "d");
    let config = Config {
        data_path: root.join("properties.json"),
        static_dir: root.join("static"),
        upload_dir: root.join("static").join("images"),
        model_path: root.join("price_model.json"),
        max_upload_bytes: 64 * 1024,
        ..Config::default()
    };

    let store = ListingStore::new(&config.data_path);
    store.save(listings).unwrap();
    let estimator = PriceEstimator::load_or_train(&config.model_path, listings);

    AppState {
        store,
        estimator,
        assistant: Assistant::new(Box::new(FakeModel::answering("Halo dari asisten"))),
        config,
    }
}
