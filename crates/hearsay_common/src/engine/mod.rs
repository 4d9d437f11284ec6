//! Rule-based QA engine over member messages.
//!
//! A single pure entry point, [`answer_question`], runs a linear pipeline:
//! resolve the member, classify the question, dispatch to an extractor,
//! render. No step does I/O and no state survives a call, so concurrent
//! invocations are safe by construction. Failure modes are rendered as
//! fixed replies (see [`replies`]), never as errors.

pub mod extract;
pub mod intent;
pub mod replies;
pub mod resolver;

use crate::message::MemberMessage;
use intent::QuestionIntent;
use tracing::debug;

pub use intent::classify;
pub use resolver::{
    extract_requested_first_name, member_message_counts, resolve_member, suggest_similar_member,
};

/// All messages attributed to one member, in collection order.
fn member_messages<'a>(messages: &'a [MemberMessage], member_name: &str) -> Vec<&'a MemberMessage> {
    messages
        .iter()
        .filter(|m| m.member_name.as_deref() == Some(member_name))
        .collect()
}

/// Answer a natural-language question about a member.
///
/// Precondition: `messages` is oldest-first; "latest" answers read the
/// last element of a filtered sequence. The question is untrusted free
/// text and every input yields some answer string.
pub fn answer_question(question: &str, messages: &[MemberMessage]) -> String {
    if messages.is_empty() {
        return replies::EMPTY_COLLECTION.to_string();
    }

    // Strict resolution first; fall back to a fuzzy first-name suggestion
    // and remember the substitution so the answer can say "did you mean".
    let mut member_name = resolver::resolve_member(question, messages);
    let mut substituted_for: Option<String> = None;

    if member_name.is_none() {
        if let Some(requested) = resolver::extract_requested_first_name(question) {
            if let Some(suggested) = resolver::suggest_similar_member(&requested, messages) {
                debug!(requested = %requested, suggested = %suggested, "fuzzy member substitution");
                member_name = Some(suggested);
                substituted_for = Some(requested);
            }
        }
    }

    let Some(member_name) = member_name else {
        return replies::UNRESOLVED_MEMBER.to_string();
    };

    let member_msgs = member_messages(messages, &member_name);
    if member_msgs.is_empty() {
        return replies::no_messages_for(&member_name);
    }

    let question_intent = intent::classify(question);
    debug!(member = %member_name, intent = %question_intent, "dispatching question");

    let core_answer = match question_intent {
        QuestionIntent::CarCount => extract::answer_car_count(&member_name, &member_msgs),
        QuestionIntent::TripWhen => {
            extract::answer_trip_when(question, &member_name, &member_msgs)
        }
        QuestionIntent::FavoriteRestaurants => {
            extract::answer_favorite_restaurants(&member_name, &member_msgs)
        }
        // Generic fallback: the member's latest message verbatim.
        QuestionIntent::Generic => member_msgs
            .last()
            .map(|m| m.text.clone())
            .unwrap_or_default(),
    };

    match substituted_for {
        Some(requested) => replies::clarified(&requested, &member_name, &core_answer),
        None => core_answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MemberMessage;

    fn msg(name: &str, text: &str) -> MemberMessage {
        MemberMessage::new(name, text)
    }

    fn community() -> Vec<MemberMessage> {
        vec![
            msg("Layla Smith", "I have 1 car"),
            msg("Layla Smith", "Actually now I have 2 cars"),
            msg("Layla Jones", "My favorite restaurant is Nobu"),
            msg("Sophia Al-Farsi", "My trip to Rome is on July 4th"),
            msg("Amina Van Den Berg", "My favorite restaurant is Le Jardin"),
        ]
    }

    #[test]
    fn test_empty_collection_reply() {
        assert_eq!(answer_question("anything", &[]), replies::EMPTY_COLLECTION);
    }

    #[test]
    fn test_unresolvable_question_reply() {
        assert_eq!(
            answer_question("what is going on", &community()),
            replies::UNRESOLVED_MEMBER
        );
    }

    #[test]
    fn test_car_count_end_to_end() {
        // Ambiguous "Layla" resolves to Smith (2 messages vs 1), and the
        // most recent count wins.
        assert_eq!(
            answer_question("How many cars does Layla have?", &community()),
            "Layla Smith has 2 cars."
        );
    }

    #[test]
    fn test_full_name_beats_first_name_popularity() {
        assert_eq!(
            answer_question("What did Layla Jones say recently?", &community()),
            "My favorite restaurant is Nobu"
        );
    }

    #[test]
    fn test_trip_when_end_to_end() {
        assert_eq!(
            answer_question("When is Sophia's trip to Rome?", &community()),
            "Sophia Al-Farsi is planning their trip to Rome around July 4th."
        );
    }

    #[test]
    fn test_fuzzy_substitution_wraps_answer() {
        let answer = answer_question("What is Amira's favorite restaurant?", &community());
        assert_eq!(
            answer,
            replies::clarified(
                "Amira",
                "Amina Van Den Berg",
                "My favorite restaurant is Le Jardin"
            )
        );
        assert!(answer.contains("Amira"));
        assert!(answer.contains("Amina Van Den Berg"));
    }

    #[test]
    fn test_fuzzy_below_threshold_is_unresolved() {
        assert_eq!(
            answer_question("What does Zorro think?", &community()),
            replies::UNRESOLVED_MEMBER
        );
    }

    #[test]
    fn test_generic_returns_latest_message() {
        assert_eq!(
            answer_question("What is Sophia up to?", &community()),
            "My trip to Rome is on July 4th"
        );
    }

    #[test]
    fn test_answer_is_idempotent() {
        let messages = community();
        let question = "How many cars does Layla have?";
        assert_eq!(
            answer_question(question, &messages),
            answer_question(question, &messages)
        );
    }
}
