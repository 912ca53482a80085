use super::config::ScoringConfig;
use super::versions::{FeatureVersions, DistanceVersion, IntervalVersion, OrderVersion, RallyVersion};

/// Convert one raw version, recording the error under `field` and falling
/// back to version 1 so the remaining fields are still checked.
fn check<V>(raw: Option<u8>, field: &str, supported: &str, errors: &mut Vec<String>) -> V
where
    V: TryFrom<u8, Error = crate::error::FeatureError> + Default,
{
    match V::try_from(raw.unwrap_or(1)) {
        Ok(version) => version,
        Err(e) => {
            errors.push(format!("scoring.{}: {} (supported: {})", field, e, supported));
            V::default()
        }
    }
}

/// Validate scoring configuration at startup and resolve it to typed versions.
/// Unset entries use version 1.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<FeatureVersions, Vec<String>> {
    let mut errors = Vec::new();

    let distance: DistanceVersion = check(config.distance, "distance", "1", &mut errors);
    let interval: IntervalVersion = check(config.interval, "interval", "1, 2", &mut errors);
    let order: OrderVersion = check(config.order, "order", "1-4", &mut errors);
    let rally: RallyVersion = check(config.rally, "rally", "1", &mut errors);

    if errors.is_empty() {
        Ok(FeatureVersions {
            distance,
            interval,
            order,
            rally,
        })
    } else {
        Err(errors)
    }
}
