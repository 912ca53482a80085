use super::versions::OrderVersion;
use crate::round::NormalizedRound;

/// Value returned when no comparable rebuttal structure exists.
pub const ORDER_UNDEFINED: f64 = -1.0;

/// Pair classification counts for one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairCounts {
    pub src_shared: usize,
    pub dst_shared: usize,
    pub crossed: usize,
}

/// Classify every unordered pair of same-speech rebuttals.
/// Pairs involving a point of information are ignored.
pub fn count_pairs(norm: &NormalizedRound) -> PairCounts {
    let mut counts = PairCounts::default();

    for attacks in norm.attacks_by_source_speech() {
        for (i, first) in attacks.iter().enumerate() {
            for second in &attacks[i + 1..] {
                if norm.is_poi(first.src) || norm.is_poi(second.src) {
                    continue;
                }
                if first.src == second.src {
                    counts.src_shared += 1;
                } else if first.tgt == second.tgt {
                    counts.dst_shared += 1;
                } else if first.tgt > second.tgt {
                    counts.crossed += 1;
                }
            }
        }
    }

    counts
}

/// How much rebuttal targets cross their speaking order.
///
/// Returns [`ORDER_UNDEFINED`] when there are no non-POI rebuttals or no
/// shared-source / crossed pairs.
pub fn calc_order(norm: &NormalizedRound, version: OrderVersion) -> f64 {
    let from_poi = norm.attacks().iter().filter(|a| norm.is_poi(a.src)).count();
    let reb_num = (norm.attacks().len() - from_poi) as f64;
    let counts = count_pairs(norm);
    let shared_or_crossed = counts.src_shared + counts.crossed;

    if reb_num == 0.0 || shared_or_crossed == 0 {
        return ORDER_UNDEFINED;
    }

    match version {
        OrderVersion::SharedOrCrossed => reb_num / shared_or_crossed as f64,
        OrderVersion::AnyShared => reb_num / (shared_or_crossed + counts.dst_shared) as f64,
        OrderVersion::CrossedOnly => {
            if counts.crossed > 0 {
                reb_num / counts.crossed as f64
            } else {
                ORDER_UNDEFINED
            }
        }
        OrderVersion::Inverted => shared_or_crossed as f64 / reb_num,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::normalize::fixtures::build_round;

    fn norm(rebuttals: &[(i64, i64)], pois: &[i64]) -> NormalizedRound {
        let round = build_round(&[&[0, 1, 2, 3], &[4, 5, 6, 7], &[8, 9, 10, 11]], rebuttals, pois);
        NormalizedRound::from_round(&round)
    }

    #[test]
    fn test_all_shared_source() {
        let n = norm(&[(5, 0), (5, 1), (5, 2)], &[]);
        assert_eq!(
            count_pairs(&n),
            PairCounts { src_shared: 3, dst_shared: 0, crossed: 0 }
        );
        assert_eq!(calc_order(&n, OrderVersion::SharedOrCrossed), 1.0);
        assert_eq!(calc_order(&n, OrderVersion::CrossedOnly), ORDER_UNDEFINED);
        assert_eq!(calc_order(&n, OrderVersion::Inverted), 1.0);
    }

    #[test]
    fn test_crossing_pair() {
        // 4 answers 2, then 5 answers 0: targets run backwards
        let n = norm(&[(4, 2), (5, 0)], &[]);
        assert_eq!(count_pairs(&n).crossed, 1);
        assert_eq!(calc_order(&n, OrderVersion::SharedOrCrossed), 2.0);
        assert_eq!(calc_order(&n, OrderVersion::CrossedOnly), 2.0);
        assert_eq!(calc_order(&n, OrderVersion::Inverted), 0.5);
    }

    #[test]
    fn test_ordered_pair_is_uncounted() {
        let n = norm(&[(4, 0), (5, 2)], &[]);
        assert_eq!(count_pairs(&n), PairCounts::default());
        assert_eq!(calc_order(&n, OrderVersion::SharedOrCrossed), ORDER_UNDEFINED);
    }

    #[test]
    fn test_target_shared_only_counts_in_version_two() {
        // (4,0)+(5,0) share target, (4,0)+(4,1) share source, (4,1)+(5,0) cross
        let n = norm(&[(4, 0), (4, 1), (5, 0)], &[]);
        assert_eq!(
            count_pairs(&n),
            PairCounts { src_shared: 1, dst_shared: 1, crossed: 1 }
        );
        assert_eq!(calc_order(&n, OrderVersion::SharedOrCrossed), 1.5);
        assert_eq!(calc_order(&n, OrderVersion::AnyShared), 1.0);
    }

    #[test]
    fn test_poi_pairs_skipped_and_not_counted() {
        // 6 is a POI; its pairs are ignored and its edge leaves the rebuttal count
        let n = norm(&[(4, 2), (5, 0), (6, 1)], &[6]);
        assert_eq!(count_pairs(&n).crossed, 1);
        assert_eq!(calc_order(&n, OrderVersion::SharedOrCrossed), 2.0);
    }

    #[test]
    fn test_only_poi_rebuttals_is_undefined() {
        let n = norm(&[(4, 0), (4, 1)], &[4]);
        assert_eq!(calc_order(&n, OrderVersion::SharedOrCrossed), ORDER_UNDEFINED);
    }

    #[test]
    fn test_pairs_do_not_cross_speeches() {
        let n = norm(&[(4, 2), (8, 0)], &[]);
        assert_eq!(count_pairs(&n), PairCounts::default());
    }
}
