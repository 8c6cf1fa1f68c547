//! # Probability Model Boundary
//!
//! The scoring classifier is trained elsewhere and injected here. The core
//! only needs one capability: given a fixed-schema row, return the
//! probabilities of the two classes `[no goal, goal]`.

use crate::error::{Result, XgError};
use crate::estimator::check_schema;
use crate::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Index of the "goal scored" class in a model output pair.
pub const GOAL_CLASS: usize = 1;

/// A trained binary classifier.
pub trait ProbabilityModel {
    /// Input columns the model was fitted on, in order.
    fn feature_names(&self) -> &[String];

    /// Class probabilities for one row, `[no goal, goal]`.
    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2]>;

    fn name(&self) -> &str {
        "model"
    }
}

/// Logistic regression exported from a fitted model.
///
/// ```json
/// { "name": "xg-logreg", "features": ["DistanceToGoal", ...],
///   "coefficients": [-0.1, ...], "intercept": -1.2 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogisticModel {
    #[serde(default = "default_model_name")]
    pub name: String,
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

fn default_model_name() -> String {
    "logistic".to_string()
}

impl LogisticModel {
    /// Model over the standard shot columns.
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        Self {
            name: default_model_name(),
            features: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            coefficients: coefficients.to_vec(),
            intercept,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| XgError::Model(format!("{}: {}", path.display(), e)))?;
        let model = Self::from_json(&content)?;
        log::info!(
            "Loaded model '{}' ({} features) from {}",
            model.name,
            model.features.len(),
            path.display()
        );
        Ok(model)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let model: LogisticModel =
            serde_json::from_str(json).map_err(|e| XgError::Model(e.to_string()))?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.features.len() != self.coefficients.len() {
            return Err(XgError::Model(format!(
                "{} features but {} coefficients",
                self.features.len(),
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(XgError::Model("non-finite coefficient".to_string()));
        }
        Ok(())
    }

    fn logit(&self, features: &FeatureVector) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.values())
                .map(|(coef, value)| coef * value)
                .sum::<f64>()
    }
}

impl ProbabilityModel for LogisticModel {
    fn feature_names(&self) -> &[String] {
        &self.features
    }

    /// Fails with [`XgError::SchemaMismatch`] unless the fitted columns are
    /// exactly the standard shot columns in order.
    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2]> {
        check_schema(&self.features)?;
        let p = sigmoid(self.logit(features));
        Ok([1.0 - p, p])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[inline]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
