// src/estimator/model.rs

use crate::estimator::features::{Features, FEATURE_COUNT};
use crate::estimator::EstimateError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fewer priced listings than this and the estimator reports "not ready".
pub const MIN_TRAINING_ROWS: usize = 5;

/// L2 penalty on the standardized weights. Keeps the normal equations
/// well-conditioned with a handful of rows and twelve columns.
pub const RIDGE_ALPHA: f64 = 1.0;

/// Per-column z-score standardization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn fit(rows: &[Features]) -> Self {
        let n = rows.len().max(1) as f64;
        let mut mean = vec![0.0; FEATURE_COUNT];
        let mut scale = vec![0.0; FEATURE_COUNT];

        for row in rows {
            for (m, x) in mean.iter_mut().zip(row) {
                *m += x / n;
            }
        }
        for row in rows {
            for ((s, x), m) in scale.iter_mut().zip(row).zip(&mean) {
                *s += (x - m).powi(2) / n;
            }
        }
        // constant columns keep scale 1 so they transform to 0
        for s in &mut scale {
            *s = if *s > f64::EPSILON { s.sqrt() } else { 1.0 };
        }

        Self { mean, scale }
    }

    pub fn transform(&self, row: &Features) -> Vec<f64> {
        row.iter()
            .zip(&self.mean)
            .zip(&self.scale)
            .map(|((x, m), s)| (x - m) / s)
            .collect()
    }
}

/// Linear model on standardized features with an L2 penalty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidgeRegression {
    pub intercept: f64,
    pub weights: Vec<f64>,
}

impl RidgeRegression {
    /// Solves `(XᵀX + αI) w = Xᵀ(y - ȳ)`. Columns of `x` must already be
    /// centered, which makes the intercept the target mean.
    pub fn fit(x: &[Vec<f64>], y: &[f64], alpha: f64) -> Result<Self, EstimateError> {
        let n = y.len();
        let p = x.first().map_or(0, Vec::len);
        let intercept = y.iter().sum::<f64>() / n.max(1) as f64;

        let mut gram = vec![vec![0.0; p]; p];
        let mut rhs = vec![0.0; p];
        for (row, target) in x.iter().zip(y) {
            let centered = target - intercept;
            for i in 0..p {
                rhs[i] += row[i] * centered;
                for j in 0..p {
                    gram[i][j] += row[i] * row[j];
                }
            }
        }
        for (i, diag) in gram.iter_mut().enumerate() {
            diag[i] += alpha;
        }

        let weights = solve(gram, rhs).ok_or(EstimateError::Singular)?;
        Ok(Self { intercept, weights })
    }

    pub fn predict(&self, x: &[f64]) -> f64 {
        self.intercept + self.weights.iter().zip(x).map(|(w, v)| w * v).sum::<f64>()
    }
}

/// Gaussian elimination with partial pivoting. `None` when singular.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}

/// Everything needed to price a listing; persisted as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceModel {
    pub scaler: StandardScaler,
    pub regression: RidgeRegression,
    pub trained_on: usize,
    pub trained_at: NaiveDateTime,
}

impl PriceModel {
    pub fn train(rows: &[(Features, f64)], now: NaiveDateTime) -> Result<Self, EstimateError> {
        if rows.len() < MIN_TRAINING_ROWS {
            return Err(EstimateError::InsufficientData {
                found: rows.len(),
                required: MIN_TRAINING_ROWS,
            });
        }

        let features: Vec<Features> = rows.iter().map(|(f, _)| *f).collect();
        let targets: Vec<f64> = rows.iter().map(|(_, y)| *y).collect();

        let scaler = StandardScaler::fit(&features);
        let scaled: Vec<Vec<f64>> = features.iter().map(|f| scaler.transform(f)).collect();
        let regression = RidgeRegression::fit(&scaled, &targets, RIDGE_ALPHA)?;

        Ok(Self {
            scaler,
            regression,
            trained_on: rows.len(),
            trained_at: now,
        })
    }

    /// Never negative.
    pub fn predict(&self, features: &Features) -> f64 {
        self.regression.predict(&self.scaler.transform(features)).max(0.0)
    }
}
