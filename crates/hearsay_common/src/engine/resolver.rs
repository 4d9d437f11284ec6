//! Member resolution from free question text.
//!
//! Strict strategy, first hit wins:
//! 1. Exact full-name substring match (longest name first).
//! 2. Unique first-name token match.
//! 3. Ambiguous first-name: pick the candidate with the most messages.
//!
//! The fuzzy suggestion path is separate and lower-confidence; only the
//! orchestrator invokes it, after the strict strategy returns nothing.

use crate::message::MemberMessage;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Minimum Jaro-Winkler similarity to suggest a member for a first name
/// we couldn't match strictly. 0.80 catches one-letter typos like
/// "Amira" -> "Amina" while rejecting unrelated names.
pub const SUGGESTION_THRESHOLD: f64 = 0.80;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]+").unwrap());
static POSSESSIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Za-z]+)'s\b").unwrap());

/// Distinct non-empty member names, lexicographically sorted.
///
/// The sort gives every downstream pass a deterministic candidate order;
/// ties anywhere in resolution fall back to this order.
fn distinct_member_names(messages: &[MemberMessage]) -> Vec<&str> {
    let mut names: Vec<&str> = messages
        .iter()
        .filter_map(|m| m.member_name.as_deref())
        .filter(|n| !n.is_empty())
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Per-member message counts over the full collection.
pub fn member_message_counts(messages: &[MemberMessage]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for msg in messages {
        if let Some(name) = msg.member_name.as_deref() {
            if !name.is_empty() {
                *counts.entry(name.to_string()).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Resolve which member a question is about, strictly.
///
/// Returns `None` when no full-name or first-name rule fires; the caller
/// may then fall back to [`suggest_similar_member`].
pub fn resolve_member(question: &str, messages: &[MemberMessage]) -> Option<String> {
    if messages.is_empty() {
        return None;
    }

    let q_lower = question.to_lowercase();
    let names = distinct_member_names(messages);
    let counts = member_message_counts(messages);

    // 1) Full-name substring match, longest name first so a short name
    //    embedded in a longer one can't shadow it. Length ties keep
    //    lexicographic order.
    let mut by_length = names.clone();
    by_length.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    for name in &by_length {
        if q_lower.contains(&name.to_lowercase()) {
            return Some((*name).to_string());
        }
    }

    // First name -> full names sharing it. Candidate lists inherit the
    // lexicographic order of `names`.
    let mut by_first: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for name in &names {
        if let Some(first) = name.split_whitespace().next() {
            by_first.entry(first.to_lowercase()).or_default().push(name);
        }
    }

    // Question word tokens; a possessive like "Amira's" yields
    // ["amira", "s"], so the name token still surfaces.
    let tokens: Vec<&str> = WORD_RE.find_iter(&q_lower).map(|m| m.as_str()).collect();

    // 2) Unique first name: safe to pick directly. Question token order
    //    decides which unique name is seen first.
    for token in &tokens {
        if let Some(candidates) = by_first.get(*token) {
            if candidates.len() == 1 {
                return Some(candidates[0].to_string());
            }
        }
    }

    // 3) Ambiguous first name: the candidate with strictly the most
    //    messages wins; ties keep the earliest candidate found.
    let mut best_name: Option<&str> = None;
    let mut best_score = 0usize;
    for token in &tokens {
        if let Some(candidates) = by_first.get(*token) {
            if candidates.len() > 1 {
                for name in candidates {
                    let score = counts.get(*name).copied().unwrap_or(0);
                    if score > best_score {
                        best_score = score;
                        best_name = Some(name);
                    }
                }
            }
        }
    }

    best_name.map(|n| n.to_string())
}

/// Pull the first-name token the question seems to ask about.
///
/// Tries the possessive form ("Amira's favorite ...") first, then the
/// first capitalized word past position 0 (skipping "What"/"When"/"How"),
/// stripped of trailing punctuation.
pub fn extract_requested_first_name(question: &str) -> Option<String> {
    if let Some(caps) = POSSESSIVE_RE.captures(question) {
        return Some(caps[1].to_string());
    }

    for (i, tok) in question.split_whitespace().enumerate() {
        if i == 0 {
            continue;
        }
        if tok.chars().next().is_some_and(|c| c.is_uppercase()) {
            let cleaned: String = tok
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if !cleaned.is_empty() {
                return Some(cleaned);
            }
        }
    }

    None
}

/// Suggest the member whose first name is most similar to the requested
/// one, if the similarity clears [`SUGGESTION_THRESHOLD`].
pub fn suggest_similar_member(
    requested_first_name: &str,
    messages: &[MemberMessage],
) -> Option<String> {
    let requested = requested_first_name.to_lowercase();

    let mut best_name: Option<&str> = None;
    let mut best_ratio = 0.0f64;

    for name in distinct_member_names(messages) {
        let Some(first) = name.split_whitespace().next() else {
            continue;
        };
        let ratio = strsim::jaro_winkler(&requested, &first.to_lowercase());
        if ratio > best_ratio {
            best_ratio = ratio;
            best_name = Some(name);
        }
    }

    if best_ratio >= SUGGESTION_THRESHOLD {
        best_name.map(|n| n.to_string())
    } else {
        None
    }
}
