// src/state.rs

use crate::assistant::Assistant;
use crate::config::Config;
use crate::db::ListingStore;
use crate::estimator::PriceEstimator;

/// Everything a request handler needs. Built once in `main` and shared by
/// reference with every worker.
pub struct AppState {
    pub config: Config,
    pub store: ListingStore,
    pub estimator: PriceEstimator,
    pub assistant: Assistant,
}

impl AppState {
    /// Retrains the price model from the current store contents. Failures are
    /// logged; the listing change that triggered this stands either way.
    pub fn refresh_estimator(&self) {
        match self.store.load() {
            Ok(listings) => self.estimator.retrain_logged(&listings),
            Err(e) => tracing::warn!(error = %e, "could not reload listings for retraining"),
        }
    }
}
