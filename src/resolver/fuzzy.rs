//! Approximate phrase matching
//!
//! Scores a transcript against each registered phrase with a normalized
//! Levenshtein distance (edits divided by the longer string's length, in
//! chars). Besides the whole transcript, every run of consecutive words with
//! the same word count as the phrase is scored too, so "open youtube" still
//! finds "youtube". The lowest distance wins; equal distances keep the
//! earlier registry entry.

use strsim::levenshtein;

use crate::registry::CommandEntry;

/// Default maximum normalized distance for a phrase to count as a match
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.3;

/// Absorbs float noise when a distance lands exactly on the threshold
const THRESHOLD_EPSILON: f64 = 1e-9;

/// A phrase that cleared the threshold
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatch<'a> {
    pub entry: &'a CommandEntry,
    /// Normalized distance in 0.0..=1.0 (0.0 = exact)
    pub distance: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl FuzzyMatcher {
    /// Create a matcher; the threshold is clamped to 0.0..=1.0
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_MATCH_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Find the best-scoring entry within the threshold
    pub fn best_match<'a>(
        &self,
        transcript: &str,
        commands: &'a [CommandEntry],
    ) -> Option<FuzzyMatch<'a>> {
        if transcript.trim().is_empty() {
            return None;
        }

        let words: Vec<&str> = transcript.split_whitespace().collect();
        let mut best: Option<FuzzyMatch<'a>> = None;

        for entry in commands {
            let distance = score(transcript, &words, entry);
            if distance > self.threshold + THRESHOLD_EPSILON {
                continue;
            }
            // Strictly better only: ties keep the earlier entry
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(FuzzyMatch { entry, distance });
            }
        }

        best
    }
}

/// Lowest distance between the phrase and the transcript or any word window of it
fn score(transcript: &str, words: &[&str], entry: &CommandEntry) -> f64 {
    let mut best = normalized_distance(transcript, &entry.phrase);

    let window = entry.word_count();
    if words.len() > window {
        for run in words.windows(window) {
            let candidate = run.join(" ");
            best = best.min(normalized_distance(&candidate, &entry.phrase));
        }
    }

    best
}

/// Levenshtein distance divided by the longer length (0.0 = identical)
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / longest as f64
}
