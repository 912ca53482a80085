use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::round::Round;
use crate::scoring::{calculate_features_detailed, FeatureVersions, Features};

/// A round file holds either a single round or a list of rounds.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoundFile {
    Many(Vec<Round>),
    One(Box<Round>),
}

/// A round together with where it was read from.
#[derive(Debug, Clone)]
pub struct LoadedRound {
    pub source: PathBuf,
    /// Position of the round inside its file
    pub index: usize,
    pub round: Round,
}

/// Scoring output for one round.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRound {
    pub source: String,
    pub index: usize,
    pub title: Option<String>,
    pub features: Features,
    pub incomplete: bool,
}

/// Expand directories into their `*.json` files (sorted); files pass through.
pub fn collect_round_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let pattern = format!(
                "{}/*.json",
                glob::Pattern::escape(&path.to_string_lossy())
            );
            let mut found: Vec<PathBuf> = glob::glob(&pattern)
                .with_context(|| format!("Invalid directory pattern for {}", path.display()))?
                .filter_map(|entry| entry.ok())
                .filter(|p| p.is_file())
                .collect();
            found.sort();
            debug!(dir = %path.display(), files = found.len(), "expanded directory");
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Load every round stored in a JSON file.
pub fn load_rounds(path: &Path) -> Result<Vec<LoadedRound>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open round file at {}", path.display()))?;
    let parsed: RoundFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse round file {}", path.display()))?;

    let rounds = match parsed {
        RoundFile::Many(rounds) => rounds,
        RoundFile::One(round) => vec![*round],
    };

    Ok(rounds
        .into_iter()
        .enumerate()
        .map(|(index, round)| LoadedRound {
            source: path.to_path_buf(),
            index,
            round,
        })
        .collect())
}

/// Load rounds from all paths. Files that fail to load are reported and
/// skipped; it is an error only when no file could be loaded.
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<LoadedRound>> {
    let files = collect_round_files(paths)?;
    if files.is_empty() {
        anyhow::bail!("No round files found.");
    }

    let mut all_rounds = Vec::new();
    let mut any_succeeded = false;

    for file in &files {
        match load_rounds(file) {
            Ok(rounds) => {
                debug!(file = %file.display(), rounds = rounds.len(), "loaded rounds");
                all_rounds.extend(rounds);
                any_succeeded = true;
            }
            Err(e) => {
                warn!("Skipping {}: {:#}", file.display(), e);
            }
        }
    }

    if !any_succeeded {
        anyhow::bail!("None of the {} round files could be loaded.", files.len());
    }

    Ok(all_rounds)
}

/// Score already loaded rounds. Each round is independent.
pub fn score_rounds(rounds: &[LoadedRound], versions: &FeatureVersions) -> Vec<ScoredRound> {
    let scored: Vec<ScoredRound> = rounds
        .iter()
        .map(|loaded| {
            let result = calculate_features_detailed(&loaded.round, versions);
            ScoredRound {
                source: loaded.source.display().to_string(),
                index: loaded.index,
                title: loaded.round.label(),
                features: result.features,
                incomplete: result.incomplete,
            }
        })
        .collect();

    let incomplete = scored.iter().filter(|s| s.incomplete).count();
    info!(rounds = scored.len(), incomplete, "scored rounds");
    scored
}
