//! High score leaderboard
//!
//! Persisted as a plain text file, one `name score` pair per line, sorted
//! descending and capped at 10 entries. Loading is best-effort: a line that
//! doesn't parse into two tokens is skipped with a warning, never an abort.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score (if it qualifies), keeping the table sorted
    /// descending and trimmed. Returns the 1-indexed rank achieved.
    pub fn add_score(&mut self, name: &str, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            name: name.to_string(),
            score,
        };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the table from disk. A missing or unreadable file yields an
    /// empty table; unparseable lines are skipped individually.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no high score file at {}, starting fresh", path.display());
                return Self::new();
            }
            Err(err) => {
                log::warn!("failed to read {}: {err}", path.display());
                return Self::new();
            }
        };

        let mut scores = Self::new();
        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let parsed = match (tokens.next(), tokens.next().map(str::parse::<u32>)) {
                (Some(name), Some(Ok(score))) => Some((name, score)),
                _ => None,
            };
            match parsed {
                Some((name, score)) => scores.entries.push(HighScoreEntry {
                    name: name.to_string(),
                    score,
                }),
                None => log::warn!(
                    "skipping malformed high score line {} in {}",
                    lineno + 1,
                    path.display()
                ),
            }
        }

        scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
        scores.entries.truncate(MAX_HIGH_SCORES);
        log::info!("loaded {} high scores", scores.entries.len());
        scores
    }

    /// Save the table to disk, best-effort: failure is logged, not raised.
    pub fn save(&self, path: &Path) {
        if let Err(err) = self.write_to(path) {
            log::warn!("failed to save high scores to {}: {err}", path.display());
        } else {
            log::info!("high scores saved ({} entries)", self.entries.len());
        }
    }

    fn write_to(&self, path: &Path) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        for entry in &self.entries {
            writeln!(file, "{} {}", entry.name, entry.score)?;
        }
        Ok(())
    }
}
