use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "debug")
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
