//! Near-match classification of candidate names.

use super::canonical::{CanonicalSet, LONG_FORMS};

/// How a candidate name relates to a canonical set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match<'a> {
    /// Byte-identical to an accepted spelling.
    Exact,
    /// Recognizably an attempt at the named canonical spelling.
    Typo(&'a str),
    Unrelated,
}

impl Match<'_> {
    pub fn is_typo(&self) -> bool {
        matches!(self, Match::Typo(_))
    }

    /// Exact or typo; anything but unrelated.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Match::Unrelated)
    }
}

/// Classify `candidate` against `set`.
///
/// A typo is a case-insensitive match that is not exact. Sets that fold
/// inflections also treat a trailing `s` added or dropped, and the spelled
/// out form of an abbreviated name, as typos.
pub fn classify<'s>(candidate: &str, set: &'s CanonicalSet) -> Match<'s> {
    if set.slots().flatten().any(|spelling| spelling == candidate) {
        return Match::Exact;
    }

    let lowered = candidate.to_lowercase();
    for slot in set.slots() {
        if slot.iter().any(|s| s.to_lowercase() == lowered) {
            return Match::Typo(preferred(slot));
        }
    }

    if set.folds_inflections() {
        for slot in set.slots() {
            let name = preferred(slot);
            let canonical = name.to_lowercase();
            let plural = format!("{}s", canonical);
            let singular = canonical.strip_suffix('s');
            if lowered == plural || singular == Some(lowered.as_str()) {
                return Match::Typo(name);
            }
            let long_form = LONG_FORMS
                .iter()
                .any(|(long, short)| *long == lowered && short.to_lowercase() == canonical);
            if long_form {
                return Match::Typo(name);
            }
        }
    }

    Match::Unrelated
}

/// The spelling a typo is reported against: the last listed, which for
/// configuration properties is the camel-cased form.
fn preferred(slot: &[String]) -> &str {
    slot.last().map(String::as_str).unwrap_or_default()
}
