use super::versions::DistanceVersion;
use crate::error::FeatureError;
use crate::round::NormalizedRound;

/// Speeches before this index cannot reach two or more speeches back.
const FIRST_FAR_CAPABLE_SPEECH: usize = 3;

/// Share of rebuttals that reach far back in the round.
///
/// A rebuttal is far when it reaches three or more speeches back, or two
/// speeches back from any speech other than the penultimate one (there a
/// two-speech reach is the expected closing rebuttal).
pub fn calc_distance(norm: &NormalizedRound, version: DistanceVersion) -> Result<f64, FeatureError> {
    let num_speeches = norm.num_speeches() as i64;
    let mut far_by_speech = vec![0usize; norm.num_speeches()];

    for attack in norm.attacks() {
        let src_speech = norm.speech_of(attack.src)?;
        let tgt_speech = norm.speech_of(attack.tgt)?;
        let dist = src_speech as i64 - tgt_speech as i64;
        let penultimate = src_speech as i64 == num_speeches - 2;

        if dist >= 3 || (!penultimate && dist >= 2) {
            far_by_speech[src_speech] += 1;
        }
    }

    let far: usize = far_by_speech.iter().sum();
    let capable: usize = norm
        .attacks_by_source_speech()
        .iter()
        .skip(FIRST_FAR_CAPABLE_SPEECH)
        .map(Vec::len)
        .sum();

    if capable == 0 {
        return Ok(0.0);
    }

    match version {
        DistanceVersion::FarRatio => Ok(far as f64 / capable as f64),
    }
}
