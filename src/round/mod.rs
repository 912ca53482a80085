pub mod normalize;
pub mod types;

pub use normalize::NormalizedRound;
pub use types::{AduId, ArgumentUnit, Attack, Rebuttal, Round, RoundSummary, Speech};
