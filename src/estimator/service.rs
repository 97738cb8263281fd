// src/estimator/service.rs

use crate::domain::Listing;
use crate::estimator::features::{listing_features, Features, PredictionInput};
use crate::estimator::model::PriceModel;
use crate::estimator::EstimateError;
use chrono::Utc;
use parking_lot::RwLock;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Price estimator shared by all request handlers.
///
/// Built once at startup with [`PriceEstimator::load_or_train`] and handed to
/// the router. Admin changes call [`PriceEstimator::retrain`], which swaps the
/// model under a write lock.
pub struct PriceEstimator {
    model_path: PathBuf,
    model: RwLock<Option<PriceModel>>,
}

impl PriceEstimator {
    /// An estimator with no model yet; predictions report `NotReady`.
    pub fn untrained(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            model: RwLock::new(None),
        }
    }

    /// Loads the persisted model, or trains from `listings` when there is
    /// none (or it cannot be read).
    pub fn load_or_train(model_path: impl Into<PathBuf>, listings: &[Listing]) -> Self {
        let estimator = Self::untrained(model_path);

        match read_model(&estimator.model_path) {
            Ok(model) => {
                info!(
                    path = %estimator.model_path.display(),
                    trained_on = model.trained_on,
                    "loaded price model"
                );
                *estimator.model.write() = Some(model);
            }
            Err(EstimateError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                estimator.retrain_logged(listings);
            }
            Err(e) => {
                warn!(error = %e, "stored price model unreadable, retraining");
                estimator.retrain_logged(listings);
            }
        }

        estimator
    }

    pub fn is_ready(&self) -> bool {
        self.model.read().is_some()
    }

    /// Trains on every priced listing and persists the result. With too few
    /// priced listings the current model is dropped, so predictions report
    /// `NotReady` instead of using stale data.
    pub fn retrain(&self, listings: &[Listing]) -> Result<usize, EstimateError> {
        let rows: Vec<(Features, f64)> = listings
            .iter()
            .filter_map(|l| l.priced().map(|price| (listing_features(l), price)))
            .collect();

        let model = match PriceModel::train(&rows, Utc::now().naive_utc()) {
            Ok(model) => model,
            Err(e @ EstimateError::InsufficientData { .. }) => {
                *self.model.write() = None;
                remove_model(&self.model_path)?;
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        write_model(&self.model_path, &model)?;
        let trained_on = model.trained_on;
        *self.model.write() = Some(model);
        info!(trained_on, "price model retrained");
        Ok(trained_on)
    }

    /// Retrain and log instead of failing; used after admin changes where a
    /// model problem must not undo the listing change.
    pub fn retrain_logged(&self, listings: &[Listing]) {
        if let Err(e) = self.retrain(listings) {
            warn!(error = %e, "price model not trained");
        }
    }

    pub fn predict(&self, input: &PredictionInput) -> Result<f64, EstimateError> {
        let guard = self.model.read();
        let model = guard.as_ref().ok_or(EstimateError::NotReady)?;
        Ok(model.predict(&input.features()))
    }
}

fn read_model(path: &Path) -> Result<PriceModel, EstimateError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn write_model(path: &Path, model: &PriceModel) -> Result<(), EstimateError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, model)?;
    writer.flush()?;
    Ok(())
}

fn remove_model(path: &Path) -> Result<(), EstimateError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
