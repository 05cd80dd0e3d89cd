//! HTTP surface
//!
//! Routing table:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/polls/` | index |
//! | GET | `/polls/{question_id}/` | detail |
//! | GET | `/polls/{question_id}/results/` | results |
//! | POST | `/polls/{question_id}/vote/` | vote |

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
