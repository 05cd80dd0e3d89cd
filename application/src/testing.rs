//! In-memory repository fake for use-case tests

use std::sync::Mutex;

use async_trait::async_trait;
use pollbooth_domain::{
    Choice, ChoiceId, PollRepository, Question, QuestionId, RepositoryError,
};

/// A `PollRepository` backed by in-process vectors
///
/// Counter increments are guarded by a mutex, which is enough to satisfy
/// the no-lost-updates contract inside a single test process.
pub struct InMemoryPollRepository {
    questions: Mutex<Vec<Question>>,
    choices: Mutex<Vec<Choice>>,
}

impl InMemoryPollRepository {
    pub fn new() -> Self {
        Self {
            questions: Mutex::new(Vec::new()),
            choices: Mutex::new(Vec::new()),
        }
    }

    pub fn add_question(&self, question: Question) {
        self.questions.lock().unwrap().push(question);
    }

    pub fn add_choice(&self, choice: Choice) {
        self.choices.lock().unwrap().push(choice);
    }

    /// Current vote count of a choice, for assertions
    pub fn votes_of(&self, id: ChoiceId) -> i64 {
        self.choices
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.votes)
            .unwrap_or(0)
    }
}

#[async_trait]
impl PollRepository for InMemoryPollRepository {
    async fn list_recent(&self, limit: u32) -> Result<Vec<Question>, RepositoryError> {
        let mut questions = self.questions.lock().unwrap().clone();
        questions.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        questions.truncate(limit as usize);
        Ok(questions)
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, RepositoryError> {
        self.questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(RepositoryError::QuestionNotFound(id))
    }

    async fn choices_for(&self, question: QuestionId) -> Result<Vec<Choice>, RepositoryError> {
        self.get_question(question).await?;
        Ok(self
            .choices
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.belongs_to(question))
            .cloned()
            .collect())
    }

    async fn get_choice(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<Choice, RepositoryError> {
        self.choices
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == choice && c.belongs_to(question))
            .cloned()
            .ok_or(RepositoryError::ChoiceNotFound { question, choice })
    }

    async fn increment_vote(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<(), RepositoryError> {
        let mut choices = self.choices.lock().unwrap();
        match choices
            .iter_mut()
            .find(|c| c.id == choice && c.belongs_to(question))
        {
            Some(matched) => {
                matched.votes += 1;
                Ok(())
            }
            None => Err(RepositoryError::ChoiceNotFound { question, choice }),
        }
    }
}
