//! Poll domain: entities, identifiers, and the repository contract

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{Choice, Question};
pub use repository::{PollRepository, RepositoryError};
pub use value_objects::{ChoiceId, QuestionId};
