//! Poll entities

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{ChoiceId, QuestionId};

/// A poll prompt with a publication timestamp
///
/// Questions are created externally (seeding, admin tooling); this core only
/// ever reads them. `published_at` defines the total order used by the
/// "latest questions" listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub published_at: DateTime<Utc>,
}

impl Question {
    pub fn new(
        id: impl Into<QuestionId>,
        text: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            published_at,
        }
    }

    /// Whether the question was published within the last day
    ///
    /// False for future-dated questions: a question scheduled for tomorrow
    /// has not been published "recently", it has not been published at all.
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        self.published_at <= now && self.published_at >= now - Duration::days(1)
    }
}

/// One selectable answer to a [`Question`], carrying a vote counter
///
/// The counter only moves through
/// [`PollRepository::increment_vote`](super::repository::PollRepository::increment_vote);
/// nothing in this crate mutates it in process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub question_id: QuestionId,
    pub text: String,
    pub votes: i64,
}

impl Choice {
    pub fn new(
        id: impl Into<ChoiceId>,
        question_id: impl Into<QuestionId>,
        text: impl Into<String>,
        votes: i64,
    ) -> Self {
        Self {
            id: id.into(),
            question_id: question_id.into(),
            text: text.into(),
            votes,
        }
    }

    /// Whether this choice belongs to the given question
    pub fn belongs_to(&self, question: QuestionId) -> bool {
        self.question_id == question
    }
}
