pub mod features;
pub mod model;
pub mod service;

use thiserror::Error;

pub use features::PredictionInput;
pub use model::PriceModel;
pub use service::PriceEstimator;

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("price model is not trained yet")]
    NotReady,
    #[error("need at least {required} priced listings to train, found {found}")]
    InsufficientData { found: usize, required: usize },
    #[error("training data is degenerate")]
    Singular,
    #[error("model file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("model file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
