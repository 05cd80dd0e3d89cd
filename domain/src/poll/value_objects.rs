//! Identifier value objects for poll records

use serde::{Deserialize, Serialize};

/// Identifier of a [`Question`](crate::poll::entities::Question) (Value Object)
///
/// Assigned by the persistence layer; the domain never invents one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw identifier value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for QuestionId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Identifier of a [`Choice`](crate::poll::entities::Choice) (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(i64);

impl ChoiceId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw identifier value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChoiceId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
