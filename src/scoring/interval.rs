use super::versions::IntervalVersion;
use crate::error::FeatureError;
use crate::round::{AduId, Attack, NormalizedRound};

/// Group a speech's attacks by target, in order of first appearance,
/// keeping only targets hit more than once.
fn shared_target_groups(attacks: &[Attack]) -> Vec<Vec<Attack>> {
    let mut groups: Vec<(AduId, Vec<Attack>)> = Vec::new();
    for attack in attacks {
        match groups.iter_mut().find(|(tgt, _)| *tgt == attack.tgt) {
            Some((_, group)) => group.push(*attack),
            None => groups.push((attack.tgt, vec![*attack])),
        }
    }
    groups
        .into_iter()
        .map(|(_, group)| group)
        .filter(|group| group.len() > 1)
        .collect()
}

/// Summed dispersion of same-target rebuttals within each speech.
///
/// The result is a sum over all groups, not an average.
pub fn calc_interval(norm: &NormalizedRound, version: IntervalVersion) -> Result<f64, FeatureError> {
    let mut total = 0.0;

    for (speech, attacks) in norm.attacks_by_source_speech().iter().enumerate() {
        let speech_len = norm.adu_count_by_speech()[speech] as i64;

        for group in shared_target_groups(attacks) {
            let (Some(first), Some(last)) = (group.first(), group.last()) else {
                continue;
            };
            let span = norm.local_index(last.src)? as i64 - norm.local_index(first.src)? as i64 - 1;

            match version {
                IntervalVersion::Simple => {
                    if speech_len > 2 {
                        total += span as f64 / (speech_len - 2) as f64;
                    }
                }
                IntervalVersion::MinGapAdjusted => {
                    let size = group.len() as i64;
                    let min_gap = size - 2;
                    let max_gap = speech_len - size;
                    if max_gap != 0 {
                        total += (span - min_gap) as f64 / max_gap as f64;
                    }
                }
            }
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::normalize::fixtures::build_round;

    /// Speech 0 holds ids 0..10, speech 1 holds 10..20.
    fn two_ten_adu_speeches(rebuttals: &[(i64, i64)]) -> NormalizedRound {
        let first: Vec<i64> = (0..10).collect();
        let second: Vec<i64> = (10..20).collect();
        NormalizedRound::from_round(&build_round(&[&first, &second], rebuttals, &[]))
    }

    #[test]
    fn test_group_of_three_simple() {
        // Attackers at local positions 1, 4, 8 of speech 1, all on target 2
        let norm = two_ten_adu_speeches(&[(11, 2), (14, 2), (18, 2)]);
        let value = calc_interval(&norm, IntervalVersion::Simple).unwrap();
        assert!((value - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_group_of_three_min_gap_adjusted() {
        let norm = two_ten_adu_speeches(&[(11, 2), (14, 2), (18, 2)]);
        let value = calc_interval(&norm, IntervalVersion::MinGapAdjusted).unwrap();
        assert!((value - 5.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_attacker_contributes_nothing() {
        let norm = two_ten_adu_speeches(&[(11, 2), (14, 3)]);
        assert_eq!(calc_interval(&norm, IntervalVersion::Simple).unwrap(), 0.0);
        assert_eq!(calc_interval(&norm, IntervalVersion::MinGapAdjusted).unwrap(), 0.0);
    }

    #[test]
    fn test_groups_are_summed() {
        // Target 2: positions 1 and 3 -> span 1 -> 1/8
        // Target 5: positions 2 and 9 -> span 6 -> 6/8
        let norm = two_ten_adu_speeches(&[(11, 2), (12, 5), (13, 2), (19, 5)]);
        let value = calc_interval(&norm, IntervalVersion::Simple).unwrap();
        assert!((value - 7.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_groups_do_not_span_speeches() {
        // Same target attacked from two different speeches
        let round = build_round(&[&[0, 1, 2], &[3, 4, 5], &[6, 7, 8]], &[(4, 0), (7, 0)], &[]);
        let norm = NormalizedRound::from_round(&round);
        assert_eq!(calc_interval(&norm, IntervalVersion::Simple).unwrap(), 0.0);
    }

    #[test]
    fn test_short_speech_skipped_in_simple() {
        let round = build_round(&[&[0, 1], &[2, 3]], &[(2, 0), (3, 0)], &[]);
        let norm = NormalizedRound::from_round(&round);
        assert_eq!(calc_interval(&norm, IntervalVersion::Simple).unwrap(), 0.0);
        // max gap = 2 - 2 = 0 contributes zero
        assert_eq!(calc_interval(&norm, IntervalVersion::MinGapAdjusted).unwrap(), 0.0);
    }
}
