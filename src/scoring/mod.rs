pub mod config;
pub mod distance;
pub mod engine;
pub mod interval;
pub mod order;
pub mod rally;
pub mod validation;
pub mod versions;

pub use config::*;
pub use engine::{calculate_features, calculate_features_detailed, FeatureFailure, FeatureResult, Features};
pub use order::ORDER_UNDEFINED;
pub use validation::validate_scoring;
pub use versions::{
    DistanceVersion, Feature, FeatureVersions, IntervalVersion, OrderVersion, RallyVersion,
};
