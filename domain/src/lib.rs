//! Domain layer for pollbooth
//!
//! This crate contains the core poll entities and the repository contract.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A poll prompt with a publication timestamp. The timestamp totally orders
//! questions, which is what the "latest questions" listing relies on.
//!
//! ## Choice
//!
//! One selectable answer to a question, carrying a vote counter. Counters
//! only ever increase, by exactly one per recorded vote, and the increment
//! is delegated to the persistence layer so concurrent voters cannot lose
//! updates.

pub mod poll;

// Re-export commonly used types
pub use poll::{
    entities::{Choice, Question},
    repository::{PollRepository, RepositoryError},
    value_objects::{ChoiceId, QuestionId},
};
