//! # xG Estimator
//!
//! Builds the feature row for a shot and forwards it to an injected
//! [`ProbabilityModel`]. Each call is one row and one model invocation; nothing
//! is cached or retried.

use crate::error::{Result, XgError};
use crate::features::{FeatureVector, ShotContext, FEATURE_NAMES};
use crate::geometry::{CoordinateConvention, ShotGeometry};
use crate::model::{ProbabilityModel, GOAL_CLASS};

#[derive(Debug, Clone, Copy, Default)]
pub struct XgEstimator {
    geometry: ShotGeometry,
}

impl XgEstimator {
    pub fn new(geometry: ShotGeometry) -> Self {
        Self { geometry }
    }

    pub fn with_convention(convention: CoordinateConvention) -> Self {
        Self::new(ShotGeometry::with_convention(convention))
    }

    pub fn geometry(&self) -> &ShotGeometry {
        &self.geometry
    }

    /// Feature row for a shot at `(x, y)`.
    pub fn features(&self, x: f64, y: f64, context: &ShotContext) -> Result<FeatureVector> {
        let (distance, angle) = self.geometry.features(x, y)?;
        Ok(FeatureVector::new(distance, angle, context))
    }

    /// Probability that a shot at `(x, y)` is scored.
    pub fn estimate<M>(&self, x: f64, y: f64, model: &M, context: &ShotContext) -> Result<f64>
    where
        M: ProbabilityModel + ?Sized,
    {
        check_schema(model.feature_names())?;
        let row = self.features(x, y, context)?;
        log::debug!("xG row for ({:.2}, {:.2}): {}", x, y, row);

        let proba = model.predict_proba(&row)?;
        validate_output(&proba)?;
        log::debug!("model '{}' -> {:.4}", model.name(), proba[GOAL_CLASS]);
        Ok(proba[GOAL_CLASS])
    }
}

/// xG for goal-centred coordinates.
pub fn calculate_xg<M>(x: f64, y: f64, model: &M, context: &ShotContext) -> Result<f64>
where
    M: ProbabilityModel + ?Sized,
{
    XgEstimator::default().estimate(x, y, model, context)
}

/// Compare a model's input columns with [`FEATURE_NAMES`], position by position.
pub fn check_schema(model_features: &[String]) -> Result<()> {
    let names = FeatureVector::names();
    let longest = model_features.len().max(names.len());
    for position in 0..longest {
        let expected = names.get(position).copied();
        let found = model_features.get(position).map(String::as_str);
        if expected != found {
            return Err(XgError::SchemaMismatch {
                position,
                expected: expected.unwrap_or("<none>").to_string(),
                found: found.unwrap_or("<none>").to_string(),
            });
        }
    }
    Ok(())
}

fn validate_output(proba: &[f64; 2]) -> Result<()> {
    if proba.iter().any(|p| !p.is_finite() || *p < 0.0 || *p > 1.0) {
        return Err(XgError::InvalidModelOutput(format!(
            "probabilities must lie in [0, 1], got [{}, {}]",
            proba[0], proba[1]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{BodyPart, PlayType};
    use crate::model::LogisticModel;
    use std::cell::RefCell;

    /// Always answers the same pair and records the rows it was given.
    struct FixedModel {
        names: Vec<String>,
        output: [f64; 2],
        seen: RefCell<Vec<FeatureVector>>,
    }

    impl FixedModel {
        fn new(output: [f64; 2]) -> Self {
            Self {
                names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                output,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProbabilityModel for FixedModel {
        fn feature_names(&self) -> &[String] {
            &self.names
        }

        fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2]> {
            self.seen.borrow_mut().push(*features);
            Ok(self.output)
        }
    }

    #[test]
    fn test_returns_goal_class() {
        let model = FixedModel::new([0.3, 0.7]);
        let ctx = ShotContext::default();
        for (x, y) in [(11.0, 0.0), (25.0, -10.0), (5.0, 8.0), (0.5, 0.0)] {
            let xg = calculate_xg(x, y, &model, &ctx).unwrap();
            assert_eq!(xg, 0.7);
        }
    }

    #[test]
    fn test_row_passed_to_model() {
        let model = FixedModel::new([0.9, 0.1]);
        let ctx = ShotContext::default()
            .with_opponents(2)
            .with_body_part(BodyPart::Head)
            .with_play_type(PlayType::DirectFreeKick);
        calculate_xg(3.0, 4.0, &model, &ctx).unwrap();

        let seen = model.seen.borrow();
        assert_eq!(seen.len(), 1);
        let v = seen[0].values();
        assert!((v[0] - 5.0).abs() < 1e-12);
        assert_eq!(&v[2..], &[2.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let estimator = XgEstimator::default();
        let ctx = ShotContext::default();
        let a = estimator.features(16.0, 6.0, &ctx).unwrap();
        let b = estimator.features(16.0, 6.0, &ctx).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn test_midfield_estimator_rebases() {
        let model = FixedModel::new([0.5, 0.5]);
        let ctx = ShotContext::default();
        XgEstimator::with_convention(CoordinateConvention::MidfieldCentered)
            .estimate(-42.0, 0.0, &model, &ctx)
            .unwrap();
        let seen = model.seen.borrow();
        assert!((seen[0].distance_to_goal - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_reordered_schema_rejected() {
        let mut model = FixedModel::new([0.3, 0.7]);
        model.names.swap(0, 1);
        let err = calculate_xg(11.0, 0.0, &model, &ShotContext::default()).unwrap_err();
        assert_eq!(
            err,
            XgError::SchemaMismatch {
                position: 0,
                expected: "DistanceToGoal".to_string(),
                found: "ShotAngle".to_string(),
            }
        );
        assert!(model.seen.borrow().is_empty());
    }

    #[test]
    fn test_short_and_renamed_schema_rejected() {
        let mut short = FixedModel::new([0.3, 0.7]);
        short.names.pop();
        let err = calculate_xg(11.0, 0.0, &short, &ShotContext::default()).unwrap_err();
        assert!(matches!(err, XgError::SchemaMismatch { position: 9, .. }));

        let mut renamed = FixedModel::new([0.3, 0.7]);
        renamed.names[8] = "play_type_Open_Play".to_string();
        let err = calculate_xg(11.0, 0.0, &renamed, &ShotContext::default()).unwrap_err();
        assert!(matches!(err, XgError::SchemaMismatch { position: 8, .. }));
    }

    #[test]
    fn test_invalid_model_output_rejected() {
        let model = FixedModel::new([f64::NAN, 0.4]);
        let err = calculate_xg(11.0, 0.0, &model, &ShotContext::default()).unwrap_err();
        assert!(matches!(err, XgError::InvalidModelOutput(_)));

        let model = FixedModel::new([-0.2, 1.2]);
        let err = calculate_xg(11.0, 0.0, &model, &ShotContext::default()).unwrap_err();
        assert!(matches!(err, XgError::InvalidModelOutput(_)));
    }

    #[test]
    fn test_domain_error_propagates() {
        let model = FixedModel::new([0.3, 0.7]);
        let err = calculate_xg(0.0, 3.66, &model, &ShotContext::default()).unwrap_err();
        assert!(matches!(err, XgError::Domain { .. }));
    }

    #[test]
    fn test_dyn_model() {
        let model: Box<dyn ProbabilityModel> = Box::new(LogisticModel::new([0.0; 10], 0.0));
        let xg = calculate_xg(11.0, 0.0, model.as_ref(), &ShotContext::default()).unwrap();
        assert!((xg - 0.5).abs() < 1e-12);
    }
}
