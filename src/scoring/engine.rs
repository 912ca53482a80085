use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::distance::calc_distance;
use super::interval::calc_interval;
use super::order::{calc_order, ORDER_UNDEFINED};
use super::rally::calc_rally;
use super::versions::{Feature, FeatureVersions};
use crate::error::FeatureError;
use crate::round::{NormalizedRound, Round};

/// The four macro-structural features of a round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub distance: f64,
    pub interval: f64,
    pub order: f64,
    pub rally: f64,
}

impl Features {
    /// Values reported when a feature cannot be computed.
    pub const ABSENT: Features = Features {
        distance: 0.0,
        interval: 0.0,
        order: ORDER_UNDEFINED,
        rally: 0.0,
    };

    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Distance => self.distance,
            Feature::Interval => self.interval,
            Feature::Order => self.order,
            Feature::Rally => self.rally,
        }
    }

    fn set(&mut self, feature: Feature, value: f64) {
        match feature {
            Feature::Distance => self.distance = value,
            Feature::Interval => self.interval = value,
            Feature::Order => self.order = value,
            Feature::Rally => self.rally = value,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::ABSENT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFailure {
    pub feature: Feature,
    pub error: FeatureError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureResult {
    pub features: Features,
    /// True when at least one feature fell back to its absent value after an error
    pub incomplete: bool,
    pub failures: Vec<FeatureFailure>,
}

fn score_one(norm: &NormalizedRound, feature: Feature, versions: &FeatureVersions) -> Result<f64, FeatureError> {
    match feature {
        Feature::Distance => calc_distance(norm, versions.distance),
        Feature::Interval => calc_interval(norm, versions.interval),
        Feature::Order => Ok(calc_order(norm, versions.order)),
        Feature::Rally => Ok(calc_rally(norm.attacks(), norm.num_speeches(), versions.rally)),
    }
}

/// Score a round, reporting which features fell back after an error.
///
/// Each scorer runs independently: one failing never blocks the others.
pub fn calculate_features_detailed(round: &Round, versions: &FeatureVersions) -> FeatureResult {
    if round.rebuttals.is_empty() {
        debug!("round has no rebuttals, reporting absent features");
        return FeatureResult {
            features: Features::ABSENT,
            incomplete: false,
            failures: Vec::new(),
        };
    }

    let norm = NormalizedRound::from_round(round);
    let mut features = Features::ABSENT;
    let mut failures = Vec::new();

    for feature in Feature::ALL {
        match score_one(&norm, feature, versions) {
            Ok(value) => features.set(feature, value),
            Err(error) => {
                warn!(%feature, %error, "feature calculation failed, using absent value");
                failures.push(FeatureFailure { feature, error });
            }
        }
    }

    FeatureResult {
        features,
        incomplete: !failures.is_empty(),
        failures,
    }
}

/// Score a round on all four features.
pub fn calculate_features(round: &Round, versions: &FeatureVersions) -> Features {
    calculate_features_detailed(round, versions).features
}
