use std::fmt;

use serde::Serialize;

use crate::error::FeatureError;

/// The four macro-structural features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Distance,
    Interval,
    Order,
    Rally,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Distance,
        Feature::Interval,
        Feature::Order,
        Feature::Rally,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Distance => "distance",
            Feature::Interval => "interval",
            Feature::Order => "order",
            Feature::Rally => "rally",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceVersion {
    /// 1: far rebuttals over rebuttals from the fourth speech onward
    #[default]
    FarRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalVersion {
    /// 1: span / (speech length - 2)
    #[default]
    Simple,
    /// 2: span normalized between minimum and maximum possible gap
    MinGapAdjusted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderVersion {
    /// 1: rebuttals / (source-shared + crossed)
    #[default]
    SharedOrCrossed,
    /// 2: rebuttals / (source-shared + target-shared + crossed)
    AnyShared,
    /// 3: rebuttals / crossed
    CrossedOnly,
    /// 4: (source-shared + crossed) / rebuttals
    Inverted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RallyVersion {
    /// 1: total rally / rebuttals / speeches
    #[default]
    PerRebuttalPerSpeech,
}

fn unsupported(feature: Feature, version: u8) -> FeatureError {
    FeatureError::UnsupportedVersion { feature, version }
}

impl TryFrom<u8> for DistanceVersion {
    type Error = FeatureError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(DistanceVersion::FarRatio),
            _ => Err(unsupported(Feature::Distance, version)),
        }
    }
}

impl TryFrom<u8> for IntervalVersion {
    type Error = FeatureError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(IntervalVersion::Simple),
            2 => Ok(IntervalVersion::MinGapAdjusted),
            _ => Err(unsupported(Feature::Interval, version)),
        }
    }
}

impl TryFrom<u8> for OrderVersion {
    type Error = FeatureError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(OrderVersion::SharedOrCrossed),
            2 => Ok(OrderVersion::AnyShared),
            3 => Ok(OrderVersion::CrossedOnly),
            4 => Ok(OrderVersion::Inverted),
            _ => Err(unsupported(Feature::Order, version)),
        }
    }
}

impl TryFrom<u8> for RallyVersion {
    type Error = FeatureError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(RallyVersion::PerRebuttalPerSpeech),
            _ => Err(unsupported(Feature::Rally, version)),
        }
    }
}

impl From<DistanceVersion> for u8 {
    fn from(_: DistanceVersion) -> u8 {
        1
    }
}

impl From<IntervalVersion> for u8 {
    fn from(version: IntervalVersion) -> u8 {
        match version {
            IntervalVersion::Simple => 1,
            IntervalVersion::MinGapAdjusted => 2,
        }
    }
}

impl From<OrderVersion> for u8 {
    fn from(version: OrderVersion) -> u8 {
        match version {
            OrderVersion::SharedOrCrossed => 1,
            OrderVersion::AnyShared => 2,
            OrderVersion::CrossedOnly => 3,
            OrderVersion::Inverted => 4,
        }
    }
}

impl From<RallyVersion> for u8 {
    fn from(_: RallyVersion) -> u8 {
        1
    }
}

/// Algorithm version selected for each scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureVersions {
    pub distance: DistanceVersion,
    pub interval: IntervalVersion,
    pub order: OrderVersion,
    pub rally: RallyVersion,
}

impl FeatureVersions {
    pub fn numbers(&self) -> [(Feature, u8); 4] {
        [
            (Feature::Distance, self.distance.into()),
            (Feature::Interval, self.interval.into()),
            (Feature::Order, self.order.into()),
            (Feature::Rally, self.rally.into()),
        ]
    }
}
