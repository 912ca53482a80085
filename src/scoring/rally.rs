use std::collections::BTreeMap;

use super::versions::RallyVersion;
use crate::round::Attack;

/// A path through the rebuttal graph: each link's target is the next link's source.
pub type Chain = Vec<Attack>;

/// Surviving chains and their length histogram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RallyBreakdown {
    /// Multi-link chains that survived subsumption filtering
    pub rallies: Vec<Chain>,
    /// Chain length -> number of chains, single rebuttals included
    pub groups: BTreeMap<usize, usize>,
    pub total_rally: usize,
}

/// Attacks that may follow `link` in a chain, newest first.
///
/// A follow-up must be launched by the ADU `link` attacks, and that ADU must
/// have been uttered before `link`'s source.
fn followers<'a>(attacks: &'a [Attack], link: &'a Attack) -> impl Iterator<Item = &'a Attack> + 'a {
    attacks
        .iter()
        .rev()
        .filter(move |next| next.src < link.src && next.src == link.tgt)
}

/// Grow every chain of two or more links, grouped by length (shortest first).
pub fn grow_chains(attacks: &[Attack]) -> Vec<Vec<Chain>> {
    let mut by_length: Vec<Vec<Chain>> = Vec::new();

    let pairs: Vec<Chain> = attacks
        .iter()
        .rev()
        .flat_map(|first| followers(attacks, first).map(move |next| vec![*first, *next]))
        .collect();
    by_length.push(pairs);

    loop {
        let Some(current) = by_length.last() else {
            break;
        };
        let mut extended = Vec::new();
        for chain in current.iter().rev() {
            let Some(last) = chain.last() else {
                continue;
            };
            for next in followers(attacks, last) {
                let mut longer = chain.clone();
                longer.push(*next);
                extended.push(longer);
            }
        }
        if extended.is_empty() {
            break;
        }
        by_length.push(extended);
    }

    by_length
}

/// True when `inner` occurs as a contiguous run inside `outer`.
fn contains_run(outer: &[Attack], inner: &[Attack]) -> bool {
    !inner.is_empty() && inner.len() <= outer.len() && outer.windows(inner.len()).any(|w| w == inner)
}

/// Drop chains that are contiguous sub-chains of a kept, longer or earlier chain.
///
/// Chains of the greatest length are always kept; shorter ones are checked
/// from longest to shortest against everything kept so far.
pub fn filter_subsumed(chains: Vec<Chain>) -> Vec<Chain> {
    let mut by_length: BTreeMap<usize, Vec<Chain>> = BTreeMap::new();
    for chain in chains {
        by_length.entry(chain.len()).or_default().push(chain);
    }

    let mut groups = by_length.into_values().rev();
    let mut kept = groups.next().unwrap_or_default();
    for group in groups {
        for chain in group {
            if !kept.iter().any(|k| contains_run(k, &chain)) {
                kept.push(chain);
            }
        }
    }
    kept
}

/// Find rallies and tally chain lengths, counting uncovered rebuttals as
/// single-link chains.
pub fn rally_breakdown(attacks: &[Attack]) -> RallyBreakdown {
    let rallies = filter_subsumed(grow_chains(attacks).into_iter().flatten().collect());

    let mut groups: BTreeMap<usize, usize> = BTreeMap::new();
    for chain in &rallies {
        *groups.entry(chain.len()).or_default() += 1;
    }
    let lone = attacks
        .iter()
        .filter(|attack| !rallies.iter().any(|chain| chain.contains(attack)))
        .count();
    if lone > 0 {
        *groups.entry(1).or_default() += lone;
    }

    let total_rally = groups.iter().map(|(len, count)| len * count).sum();

    RallyBreakdown {
        rallies,
        groups,
        total_rally,
    }
}

/// How much rebuttals chain into multi-hop rallies.
///
/// Rebuttals outside every rally still count once each, so a round with no
/// rally scores `1 / num_speeches`.
pub fn calc_rally(attacks: &[Attack], num_speeches: usize, version: RallyVersion) -> f64 {
    if attacks.is_empty() || num_speeches == 0 {
        return 0.0;
    }

    let breakdown = rally_breakdown(attacks);

    match version {
        RallyVersion::PerRebuttalPerSpeech => {
            breakdown.total_rally as f64 / attacks.len() as f64 / num_speeches as f64
        }
    }
}
