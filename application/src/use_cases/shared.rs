//! Output types shared between use cases

use pollbooth_domain::{Choice, Question};
use serde::Serialize;

/// A question together with its choices
///
/// Returned by both the detail and the results use cases; the detail view
/// renders the choices as a form, the results view renders their tallies.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionWithChoices {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl QuestionWithChoices {
    pub fn new(question: Question, choices: Vec<Choice>) -> Self {
        Self { question, choices }
    }

    /// Total votes across all choices
    pub fn total_votes(&self) -> i64 {
        self.choices.iter().map(|c| c.votes).sum()
    }
}
