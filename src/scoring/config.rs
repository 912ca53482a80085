use serde::{Deserialize, Serialize};

/// Scorer version selection.
///
/// Versions are kept as raw numbers here and checked by
/// [`validate_scoring`](super::validate_scoring) at startup.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   distance: 1
///   interval: 2
///   order: 1
///   rally: 1
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Distance version (only 1)
    #[serde(default)]
    pub distance: Option<u8>,

    /// Interval version: 1 simple normalization, 2 minimum-gap adjusted
    #[serde(default)]
    pub interval: Option<u8>,

    /// Order version, 1 to 4
    #[serde(default)]
    pub order: Option<u8>,

    /// Rally version (only 1)
    #[serde(default)]
    pub rally: Option<u8>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            distance: Some(1),
            interval: Some(1),
            order: Some(1),
            rally: Some(1),
        }
    }
}

impl ScoringConfig {
    /// Layer per-feature overrides on top of this config.
    pub fn with_overrides(
        &self,
        distance: Option<u8>,
        interval: Option<u8>,
        order: Option<u8>,
        rally: Option<u8>,
    ) -> Self {
        Self {
            distance: distance.or(self.distance),
            interval: interval.or(self.interval),
            order: order.or(self.order),
            rally: rally.or(self.rally),
        }
    }
}
