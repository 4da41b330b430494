//! Trivia logic: pagination, quiz selection, validation, and per-endpoint orchestration.

pub mod pagination;
pub mod quiz;
mod trivia;
mod validation;
pub use trivia::{QuestionPage, TriviaService};
pub use validation::QuestionValidator;
