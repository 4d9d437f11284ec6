//! Rule-based question classifier.
//!
//! Keyword rules only, evaluated on the lower-cased question, first match
//! wins. Order matters: a question hitting both the car and restaurant
//! keyword sets classifies as CarCount because that rule runs first.

use serde::{Deserialize, Serialize};

/// Question categories the engine knows how to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionIntent {
    /// "How many cars does X have?"
    CarCount,
    /// "What are X's favorite restaurants?"
    FavoriteRestaurants,
    /// "When is X's trip to Y?"
    TripWhen,
    /// Anything else: fall back to the member's latest message.
    Generic,
}

impl std::fmt::Display for QuestionIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CarCount => "car_count",
            Self::FavoriteRestaurants => "favorite_restaurants",
            Self::TripWhen => "trip_when",
            Self::Generic => "generic",
        };
        write!(f, "{}", s)
    }
}

/// Classify a question into an intent.
pub fn classify(question: &str) -> QuestionIntent {
    let q = question.to_lowercase();

    if q.contains("how many") && q.contains("car") {
        return QuestionIntent::CarCount;
    }

    if q.contains("favorite") && q.contains("restaurant") {
        return QuestionIntent::FavoriteRestaurants;
    }

    if q.contains("when") && q.contains("trip") {
        return QuestionIntent::TripWhen;
    }

    QuestionIntent::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_car_count() {
        assert_eq!(
            classify("How many cars does Layla have?"),
            QuestionIntent::CarCount
        );
    }

    #[test]
    fn test_classify_favorite_restaurants() {
        assert_eq!(
            classify("What are Amina's favorite restaurants?"),
            QuestionIntent::FavoriteRestaurants
        );
    }

    #[test]
    fn test_classify_trip_when() {
        assert_eq!(
            classify("When is Sophia planning her trip to Rome?"),
            QuestionIntent::TripWhen
        );
    }

    #[test]
    fn test_classify_generic() {
        assert_eq!(
            classify("Tell me something about Layla"),
            QuestionIntent::Generic
        );
    }

    #[test]
    fn test_classify_priority_car_before_restaurant() {
        // Hits both keyword sets; the car rule is declared first.
        assert_eq!(
            classify("How many cars are parked at Layla's favorite restaurant?"),
            QuestionIntent::CarCount
        );
    }

    #[test]
    fn test_classify_needs_both_keywords() {
        // "car" alone without "how many" is not a count question.
        assert_eq!(
            classify("Does Layla drive a car?"),
            QuestionIntent::Generic
        );
    }
}
