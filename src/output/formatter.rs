use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use owo_colors::OwoColorize;
use std::io::{IsTerminal, Write};
use std::path::Path;

use crate::batch::{LoadedRound, ScoredRound};
use crate::scoring::{Feature, ORDER_UNDEFINED};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a feature value with four decimals; undefined order shows as "n/a".
pub fn format_value(feature: Feature, value: f64) -> String {
    if feature == Feature::Order && value == ORDER_UNDEFINED {
        "n/a".to_string()
    } else {
        format!("{:.4}", value)
    }
}

/// Display name for a scored round: its label, else file and position.
fn round_name(scored: &ScoredRound) -> String {
    scored
        .title
        .clone()
        .unwrap_or_else(|| format!("{}#{}", scored.source, scored.index))
}

/// Format scored rounds as an aligned table with a header row.
/// Rounds with a fallen-back feature get a trailing asterisk.
pub fn format_features_table(rounds: &[ScoredRound], use_colors: bool) -> String {
    if rounds.is_empty() {
        return "No rounds scored.".to_string();
    }

    let names: Vec<String> = rounds.iter().map(round_name).collect();
    let name_width = names
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("round".len());
    let col = 10;

    let header = format!(
        "{:<name_width$}  {:>col$}  {:>col$}  {:>col$}  {:>col$}",
        "round",
        "distance",
        "interval",
        "order",
        "rally",
        name_width = name_width,
        col = col
    );
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for (scored, name) in rounds.iter().zip(&names) {
        let values: Vec<String> = Feature::ALL
            .iter()
            .map(|&f| format!("{:>col$}", format_value(f, scored.features.get(f)), col = col))
            .collect();
        let marker = if scored.incomplete { "*" } else { "" };
        let padded = format!("{:<name_width$}", name, name_width = name_width);

        if use_colors {
            lines.push(format!(
                "{}  {}{}",
                padded.cyan(),
                values.join("  "),
                marker.yellow()
            ));
        } else {
            lines.push(format!("{}  {}{}", padded, values.join("  "), marker));
        }
    }

    lines.join("\n")
}

/// Format scored rounds as tab-separated values for scripting
/// Columns: source, index, title, distance, interval, order, rally, incomplete
/// (no headers, no colors, raw values)
pub fn format_tsv(rounds: &[ScoredRound]) -> String {
    rounds
        .iter()
        .map(|s| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                s.source,
                s.index,
                s.title.as_deref().unwrap_or(""),
                s.features.distance,
                s.features.interval,
                s.features.order,
                s.features.rally,
                s.incomplete
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_json(rounds: &[ScoredRound]) -> Result<String> {
    serde_json::to_string_pretty(rounds).context("Failed to serialize scored rounds")
}

/// One line per round with its structural counts.
pub fn format_summary(rounds: &[LoadedRound], use_colors: bool) -> String {
    if rounds.is_empty() {
        return "No rounds found.".to_string();
    }

    rounds
        .iter()
        .map(|loaded| {
            let name = loaded
                .round
                .label()
                .unwrap_or_else(|| format!("{}#{}", loaded.source.display(), loaded.index));
            let s = loaded.round.summary();
            let counts = format!(
                "{} speeches, {} ADUs, {} rebuttals, {} POIs",
                s.speech_count, s.total_argument_units, s.rebuttal_count, s.poi_count
            );
            if use_colors {
                format!("{}: {}", name.bold(), counts)
            } else {
                format!("{}: {}", name, counts)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write output to a file atomically so readers never see a partial file.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Round;
    use crate::scoring::Features;
    use std::path::PathBuf;

    fn sample(title: Option<&str>, incomplete: bool) -> ScoredRound {
        ScoredRound {
            source: "rounds/a.json".to_string(),
            index: 0,
            title: title.map(str::to_string),
            features: Features {
                distance: 0.5,
                interval: 1.25,
                order: -1.0,
                rally: 0.0833333,
            },
            incomplete,
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Feature::Order, -1.0), "n/a");
        assert_eq!(format_value(Feature::Order, 2.0), "2.0000");
        assert_eq!(format_value(Feature::Distance, 0.0), "0.0000");
    }

    #[test]
    fn test_table_empty() {
        assert_eq!(format_features_table(&[], false), "No rounds scored.");
    }

    #[test]
    fn test_table_rows() {
        let table = format_features_table(&[sample(Some("Ransom ban"), false)], false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("round"));
        assert!(lines[1].contains("Ransom ban"));
        assert!(lines[1].contains("0.5000"));
        assert!(lines[1].contains("n/a"));
        assert!(!lines[1].ends_with('*'));
    }

    #[test]
    fn test_table_marks_incomplete_and_falls_back_to_source() {
        let table = format_features_table(&[sample(None, true)], false);
        let row = table.lines().nth(1).unwrap();
        assert!(row.starts_with("rounds/a.json#0"));
        assert!(row.ends_with('*'));
    }

    #[test]
    fn test_tsv() {
        let tsv = format_tsv(&[sample(Some("T"), false)]);
        let fields: Vec<&str> = tsv.split('\t').collect();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[2], "T");
        assert_eq!(fields[5], "-1");
        assert_eq!(fields[7], "false");
    }

    #[test]
    fn test_json_contains_features() {
        let json = format_json(&[sample(Some("T"), false)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["features"]["order"], -1.0);
        assert_eq!(value[0]["title"], "T");
    }

    #[test]
    fn test_summary() {
        let loaded = LoadedRound {
            source: PathBuf::from("x.json"),
            index: 2,
            round: Round::default(),
        };
        assert_eq!(
            format_summary(&[loaded], false),
            "x.json#2: 0 speeches, 0 ADUs, 0 rebuttals, 0 POIs"
        );
    }

    #[test]
    fn test_write_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_output(&path, "[]").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }
}
