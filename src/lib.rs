//! Macro-structural scoring of debate rounds.
//!
//! A round's rebuttal graph is reduced to four features: how far back
//! rebuttals reach (`distance`), how dispersed same-target rebuttals are
//! inside a speech (`interval`), how much rebuttal targets cross (`order`)
//! and how long rebuttal chains grow (`rally`).

pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod round;
pub mod scoring;

pub use error::FeatureError;
pub use round::{ArgumentUnit, Attack, NormalizedRound, Rebuttal, Round, Speech};
pub use scoring::{calculate_features, calculate_features_detailed, FeatureResult, Features};
