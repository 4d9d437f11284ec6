//! Per-intent answer extractors.
//!
//! Each extractor gets the resolved member's name and that member's
//! messages only, already filtered and still in collection order, and
//! always produces a rendered answer string.

use crate::engine::replies;
use crate::message::MemberMessage;
use once_cell::sync::Lazy;
use regex::Regex;

/// "2 cars", "1 car" - digits followed by the prefix "car".
static CAR_COUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+)\s+car").unwrap());

/// "June 5th, 2025", "Aug. 3" - month name, day, optional ordinal and year.
static MONTH_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,\s*\d{4})?",
    )
    .unwrap()
});

/// "06/05/2025", "6/5/25" - slash-delimited numeric date.
static SLASH_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap());

/// "trip to London" - captures the run of letters and spaces after "to".
static DESTINATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)trip to ([A-Za-z ]+)").unwrap());

/// Find a car count in one message text, if any.
///
/// A numeric token too large to parse counts as no match rather than an
/// error; the engine never surfaces parse failures.
fn extract_car_count(text: &str) -> Option<u64> {
    let lowered = text.to_lowercase();
    let caps = CAR_COUNT_RE.captures(&lowered)?;
    caps[1].parse().ok()
}

/// Find a date-like phrase in a message text.
///
/// Month-name dates win over slash dates; neither is validated as a real
/// calendar date.
pub fn extract_date_phrase(text: &str) -> Option<String> {
    if let Some(m) = MONTH_DATE_RE.find(text) {
        return Some(m.as_str().to_string());
    }
    SLASH_DATE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Pull a destination out of the question, e.g. "trip to Rome?" -> "Rome".
pub fn extract_destination(question: &str) -> Option<String> {
    DESTINATION_RE
        .captures(question)
        .map(|caps| caps[1].trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Answer "How many cars does X have?".
///
/// Scans newest to oldest so a corrected count supersedes an earlier one.
pub fn answer_car_count(member_name: &str, messages: &[&MemberMessage]) -> String {
    for msg in messages.iter().rev() {
        if let Some(count) = extract_car_count(&msg.text) {
            let plural = if count != 1 { "s" } else { "" };
            return format!("{member_name} has {count} car{plural}.");
        }
    }

    replies::no_car_count_for(member_name)
}

/// Answer "When is X's trip (to Y)?".
///
/// With a destination in the question, only messages mentioning that
/// destination are considered; otherwise any message mentioning "trip".
/// The latest candidate's date phrase is reported when one exists, else
/// the candidate's raw text.
pub fn answer_trip_when(
    question: &str,
    member_name: &str,
    messages: &[&MemberMessage],
) -> String {
    let Some(destination) = extract_destination(question) else {
        let candidates: Vec<&&MemberMessage> = messages
            .iter()
            .filter(|m| m.text.to_lowercase().contains("trip"))
            .collect();
        let Some(latest) = candidates.last() else {
            return replies::no_trip_details_for(member_name);
        };
        return match extract_date_phrase(&latest.text) {
            Some(date) => {
                format!("{member_name} seems to be planning a trip around {date}.")
            }
            None => latest.text.clone(),
        };
    };

    let dest_lower = destination.to_lowercase();
    let candidates: Vec<&&MemberMessage> = messages
        .iter()
        .filter(|m| m.text.to_lowercase().contains(&dest_lower))
        .collect();

    let Some(latest) = candidates.last() else {
        return replies::no_trip_to_destination(member_name, &destination);
    };

    match extract_date_phrase(&latest.text) {
        Some(date) => {
            format!("{member_name} is planning their trip to {destination} around {date}.")
        }
        None => latest.text.clone(),
    }
}

/// Answer "What are X's favorite restaurants?".
pub fn answer_favorite_restaurants(member_name: &str, messages: &[&MemberMessage]) -> String {
    let candidates: Vec<&str> = messages
        .iter()
        .filter(|m| {
            let lowered = m.text.to_lowercase();
            lowered.contains("favorite") && lowered.contains("restaurant")
        })
        .map(|m| m.text.as_str())
        .collect();

    match candidates.as_slice() {
        [] => replies::no_favorite_restaurants_for(member_name),
        [only] => (*only).to_string(),
        many => format!(
            "{member_name}'s messages about favorite restaurants: {}",
            many.join(" | ")
        ),
    }
}
