//! Use cases
//!
//! Application-level operations that orchestrate domain logic. One use case
//! per HTTP operation: list, detail, results, vote.

pub mod cast_vote;
pub mod list_questions;
pub mod question_detail;
pub mod question_results;
pub mod shared;
