use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::MeetingSummary;

const SUMMARY_SENTENCES: usize = 6;
const LONG_SENTENCE_WORDS: usize = 6;
const MAX_MATCHES: usize = 10;

static DECISION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_patterns(&[
        r"(?i)\bdecided to\b",
        r"(?i)\bconcluded?\b",
        r"(?i)\bagreed to\b",
        r"(?i)\bdecision\b",
    ])
});

static ACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_patterns(&[
        r"(?i)\bwill\b",
        r"(?i)\btodo\b",
        r"(?i)\baction item\b",
        r"(?i)\bassign(ed)? to\b",
        r"(?i)\bby (monday|tuesday|wednesday|thursday|friday|\d{1,2}/\d{1,2})\b",
    ])
});

fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("pattern is a valid regex"))
        .collect()
}

/// Rule-based summary extraction straight from the transcript text.
/// Deterministic, no I/O, and total: any input string produces a result.
pub struct HeuristicSummarizer;

impl HeuristicSummarizer {
    pub fn extract(transcript: &str) -> MeetingSummary {
        let sentences = split_sentences(transcript);

        let long_sentences: Vec<&str> = sentences
            .iter()
            .copied()
            .filter(|s| s.split_whitespace().count() >= LONG_SENTENCE_WORDS)
            .collect();

        let summary_sentences: &[&str] = if long_sentences.is_empty() {
            &sentences
        } else {
            &long_sentences
        };
        let summary = summary_sentences
            .iter()
            .take(SUMMARY_SENTENCES)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        MeetingSummary {
            summary,
            decisions: matching_sentences(&sentences, &DECISION_PATTERNS),
            action_items: matching_sentences(&sentences, &ACTION_PATTERNS),
        }
    }
}

#[async_trait]
impl Summarizer for HeuristicSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<MeetingSummary, SummarizerError> {
        Ok(Self::extract(transcript))
    }
}

/// Split after `.`, `!` or `?` followed by whitespace. The punctuation stays
/// with the preceding sentence; the whitespace run is the separator. Text
/// without terminal punctuation is a single sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let boundary = match chars.peek() {
            Some((_, next)) if next.is_whitespace() => idx + ch.len_utf8(),
            _ => continue,
        };
        sentences.push(&text[start..boundary]);
        while let Some((_, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            chars.next();
        }
        start = chars.peek().map(|(i, _)| *i).unwrap_or(text.len());
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

fn matching_sentences(sentences: &[&str], patterns: &[Regex]) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| patterns.iter().any(|p| p.is_match(s)))
        .map(|s| s.trim_matches([' ', '-']).to_string())
        .take(MAX_MATCHES)
        .collect()
}
