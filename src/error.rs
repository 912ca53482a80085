use thiserror::Error;

use crate::round::AduId;
use crate::scoring::Feature;

/// Errors raised by the scoring library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// A rebuttal references an argument unit that no speech contains.
    #[error("argument unit {0} does not belong to any speech")]
    UnknownAdu(AduId),

    /// A raw version number has no matching algorithm.
    #[error("unsupported {feature} version: {version}")]
    UnsupportedVersion { feature: Feature, version: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FeatureError::UnknownAdu(42).to_string(),
            "argument unit 42 does not belong to any speech"
        );
        let err = FeatureError::UnsupportedVersion {
            feature: Feature::Order,
            version: 9,
        };
        assert_eq!(err.to_string(), "unsupported order version: 9");
    }
}
