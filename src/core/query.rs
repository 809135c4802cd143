//! Query interpretation for free-text search requests.
//!
//! This module resolves a free-text query like
//! `"find struggling students of class 7 in math this month"` into
//! structured `{class_id, subject, period}` parameters.
//!
//! Matching is deliberately fixed-vocabulary and first-match:
//! - subjects tie-break by vocabulary declaration order, not by
//!   position in the query
//! - periods are checked in a fixed order by substring containment
//!
//! Extraction is pure and never fails; an unmatched field is `None`.

use once_cell::sync::Lazy;
use regex::Regex;

// Regex patterns compiled once at startup.
// Keyword before digits: "class 7", "grade 3rd"
static CLASS_THEN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:class|grade)\s*(\d+)(?:st|nd|rd|th)?").unwrap());

// Digits before keyword: "7th class", "3 grade"
static DIGITS_THEN_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)(?:st|nd|rd|th)?\s*(?:class|grade)").unwrap());

/// Subject vocabulary, in tie-break order
pub const SUBJECTS: [&str; 8] = [
    "math",
    "english",
    "science",
    "history",
    "geography",
    "physics",
    "chemistry",
    "biology",
];

// Period phrases checked in order; first containment wins.
const PERIODS: [(&str, &str); 4] = [
    ("this month", "this_month"),
    ("last month", "last_month"),
    ("this year", "this_year"),
    ("last year", "last_year"),
];

/// Period labels a default may be chosen from
pub const PERIOD_LABELS: [&str; 4] = ["this_month", "last_month", "this_year", "last_year"];

/// Parameters resolved from a free-text query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedParams {
    /// Class identifier digits, e.g. "7"
    pub class_id: Option<String>,

    /// Subject vocabulary member, e.g. "math"
    pub subject: Option<String>,

    /// Period label, e.g. "this_month"
    pub period: Option<String>,
}

impl ExtractedParams {
    /// Whether enough was resolved to issue a backend call
    pub fn is_complete(&self) -> bool {
        self.class_id.is_some() && self.subject.is_some()
    }
}

/// Resolve structured parameters from a free-text query.
///
/// Case-folds the query, then matches class pattern, subject
/// vocabulary, and period phrases independently.
pub fn extract(query: &str) -> ExtractedParams {
    let folded = query.to_lowercase();

    ExtractedParams {
        class_id: extract_class_id(&folded),
        subject: extract_subject(&folded),
        period: extract_period(&folded),
    }
}

/// Match "class/grade N" first, then "N class/grade".
/// First successful pattern wins; no further search.
fn extract_class_id(folded: &str) -> Option<String> {
    CLASS_THEN_DIGITS
        .captures(folded)
        .or_else(|| DIGITS_THEN_CLASS.captures(folded))
        .map(|caps| caps[1].to_string())
}

fn extract_subject(folded: &str) -> Option<String> {
    SUBJECTS
        .iter()
        .find(|subject| folded.contains(*subject))
        .map(|subject| (*subject).to_string())
}

fn extract_period(folded: &str) -> Option<String> {
    PERIODS
        .iter()
        .find(|(phrase, _)| folded.contains(phrase))
        .map(|(_, label)| (*label).to_string())
}
