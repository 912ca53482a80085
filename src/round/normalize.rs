use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::types::{AduId, Attack, Round};
use crate::error::FeatureError;

/// Position of an argument unit inside the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AduPosition {
    speech: usize,
    local: usize,
}

/// Secondary views of a round shared by all scorers.
///
/// Built once per round; lookups are hash-map backed.
#[derive(Debug, Clone)]
pub struct NormalizedRound {
    attacks: Vec<Attack>,
    positions: HashMap<AduId, AduPosition>,
    attacks_by_source_speech: Vec<Vec<Attack>>,
    adu_count_by_speech: Vec<usize>,
    pois: HashSet<AduId>,
}

impl NormalizedRound {
    pub fn from_round(round: &Round) -> Self {
        let mut positions = HashMap::new();
        for (speech, s) in round.speeches.iter().enumerate() {
            for (local, unit) in s.argument_units.iter().enumerate() {
                // First occurrence wins for duplicated ids
                positions
                    .entry(unit.sequence_id)
                    .or_insert(AduPosition { speech, local });
            }
        }

        let attacks: Vec<Attack> = round.rebuttals.clone();

        let mut attacks_by_source_speech = vec![Vec::new(); round.speeches.len()];
        for attack in &attacks {
            match positions.get(&attack.src) {
                Some(pos) => attacks_by_source_speech[pos.speech].push(*attack),
                None => debug!(
                    src = attack.src,
                    tgt = attack.tgt,
                    "rebuttal source is not in any speech, left out of speech buckets"
                ),
            }
        }

        let adu_count_by_speech = round
            .speeches
            .iter()
            .map(|speech| speech.argument_units.len())
            .collect();

        Self {
            attacks,
            positions,
            attacks_by_source_speech,
            adu_count_by_speech,
            pois: round.pois.iter().copied().collect(),
        }
    }

    /// All attacks in input order.
    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    pub fn num_speeches(&self) -> usize {
        self.adu_count_by_speech.len()
    }

    /// Index of the speech containing `adu`.
    pub fn speech_of(&self, adu: AduId) -> Result<usize, FeatureError> {
        self.positions
            .get(&adu)
            .map(|pos| pos.speech)
            .ok_or(FeatureError::UnknownAdu(adu))
    }

    /// Position of `adu` within its own speech.
    pub fn local_index(&self, adu: AduId) -> Result<usize, FeatureError> {
        self.positions
            .get(&adu)
            .map(|pos| pos.local)
            .ok_or(FeatureError::UnknownAdu(adu))
    }

    /// One bucket per speech holding the attacks launched from it.
    pub fn attacks_by_source_speech(&self) -> &[Vec<Attack>] {
        &self.attacks_by_source_speech
    }

    pub fn adu_count_by_speech(&self) -> &[usize] {
        &self.adu_count_by_speech
    }

    pub fn is_poi(&self, adu: AduId) -> bool {
        self.pois.contains(&adu)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::round::{ArgumentUnit, Rebuttal, Round, Speech};

    use super::AduId;

    /// Build a round from per-speech ADU ids, rebuttal pairs and POI ids.
    pub fn build_round(speeches: &[&[AduId]], rebuttals: &[(AduId, AduId)], pois: &[AduId]) -> Round {
        Round {
            speeches: speeches
                .iter()
                .map(|ids| Speech {
                    argument_units: ids
                        .iter()
                        .map(|&id| ArgumentUnit {
                            sequence_id: id,
                            start: id as f64,
                            end: id as f64 + 1.0,
                            text: format!("adu {}", id),
                        })
                        .collect(),
                })
                .collect(),
            rebuttals: rebuttals
                .iter()
                .map(|&(src, tgt)| Rebuttal::new(src, tgt))
                .collect(),
            pois: pois.to_vec(),
            ..Default::default()
        }
    }

    /// Six speeches of `per_speech` ADUs each with ids numbered from 0.
    pub fn six_speech_ids(per_speech: i64) -> Vec<Vec<AduId>> {
        (0..6)
            .map(|s| (s * per_speech..(s + 1) * per_speech).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::build_round;
    use super::*;
    use crate::round::Rebuttal;

    #[test]
    fn test_lookup_and_buckets() {
        let round = build_round(
            &[&[0, 1], &[2, 3, 4], &[5]],
            &[(5, 2), (2, 0), (4, 1), (5, 3)],
            &[4],
        );
        let norm = NormalizedRound::from_round(&round);

        assert_eq!(norm.num_speeches(), 3);
        assert_eq!(norm.speech_of(3).unwrap(), 1);
        assert_eq!(norm.local_index(4).unwrap(), 2);
        assert_eq!(norm.adu_count_by_speech(), &[2, 3, 1]);
        assert!(norm.attacks_by_source_speech()[0].is_empty());
        assert_eq!(
            norm.attacks_by_source_speech()[1],
            vec![Rebuttal::new(2, 0), Rebuttal::new(4, 1)]
        );
        assert_eq!(
            norm.attacks_by_source_speech()[2],
            vec![Rebuttal::new(5, 2), Rebuttal::new(5, 3)]
        );
        assert!(norm.is_poi(4));
        assert!(!norm.is_poi(5));
    }

    #[test]
    fn test_attacks_keep_input_order() {
        let round = build_round(&[&[1], &[2], &[3]], &[(3, 2), (2, 1), (3, 1)], &[]);
        let norm = NormalizedRound::from_round(&round);
        let srcs: Vec<_> = norm.attacks().iter().map(|a| a.src).collect();
        assert_eq!(srcs, vec![3, 2, 3]);
    }

    #[test]
    fn test_unknown_adu_is_error() {
        let round = build_round(&[&[1], &[2]], &[(9, 1)], &[]);
        let norm = NormalizedRound::from_round(&round);
        assert_eq!(norm.speech_of(9), Err(FeatureError::UnknownAdu(9)));
        assert_eq!(norm.attacks().len(), 1);
        assert!(norm.attacks_by_source_speech().iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_duplicate_id_first_occurrence_wins() {
        let round = build_round(&[&[1, 2], &[2, 3]], &[], &[]);
        let norm = NormalizedRound::from_round(&round);
        assert_eq!(norm.speech_of(2).unwrap(), 0);
        assert_eq!(norm.local_index(2).unwrap(), 1);
    }
}
