//! Fixed engine replies.
//!
//! Every way the engine can come up empty is a normal textual answer, not
//! an error. The strings live here as named constants and builders so the
//! rest of the engine (and the tests) never spell them out inline.

/// Reply when the upstream collection was empty.
pub const EMPTY_COLLECTION: &str = "I couldn't retrieve any member messages.";

/// Reply when no resolution strategy identified a member.
pub const UNRESOLVED_MEMBER: &str = "I couldn't identify which member the question is about.";

/// Reply when a member resolved but has no messages in the collection.
pub fn no_messages_for(member_name: &str) -> String {
    format!("I couldn't find any messages for {member_name}.")
}

/// Reply when no car count could be extracted for a member.
pub fn no_car_count_for(member_name: &str) -> String {
    format!("I couldn't find how many cars {member_name} has in their messages.")
}

/// Reply when a member has no trip-related messages at all.
pub fn no_trip_details_for(member_name: &str) -> String {
    format!("I couldn't find any trip details for {member_name}.")
}

/// Reply when a member never mentions the asked-about destination.
pub fn no_trip_to_destination(member_name: &str, destination: &str) -> String {
    format!("I couldn't find any messages from {member_name} about a trip to {destination}.")
}

/// Reply when a member never mentions favorite restaurants.
pub fn no_favorite_restaurants_for(member_name: &str) -> String {
    format!("I couldn't find any messages about {member_name}'s favorite restaurants.")
}

/// Wrap a core answer with the fuzzy-substitution clarification.
///
/// Used when the question named someone we don't know (`requested`) and
/// the engine answered about the closest match (`matched`) instead.
pub fn clarified(requested: &str, matched: &str, core_answer: &str) -> String {
    format!(
        "I couldn't find any member named {requested}, but I did find {matched}. \
         Here is what their messages say:\n\n{core_answer}"
    )
}
