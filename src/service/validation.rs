//! Content checks applied to a new question after it has been decoded.

use crate::error::AppError;
use crate::models::NewQuestion;

pub struct QuestionValidator;

impl QuestionValidator {
    /// `question` and `answer` must contain something other than whitespace.
    pub fn validate(question: &NewQuestion) -> Result<(), AppError> {
        for (field, value) in [("question", &question.question), ("answer", &question.answer)] {
            if value.trim().is_empty() {
                return Err(AppError::Unprocessable(format!("{} must not be blank", field)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(question: &str, answer: &str) -> NewQuestion {
        NewQuestion {
            question: question.into(),
            answer: answer.into(),
            category: 1,
            difficulty: 2,
        }
    }

    #[test]
    fn accepts_filled_fields() {
        assert!(QuestionValidator::validate(&new_question("Who?", "Me")).is_ok());
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(matches!(
            QuestionValidator::validate(&new_question("  ", "Me")),
            Err(AppError::Unprocessable(m)) if m.starts_with("question")
        ));
        assert!(matches!(
            QuestionValidator::validate(&new_question("Who?", "")),
            Err(AppError::Unprocessable(m)) if m.starts_with("answer")
        ));
    }
}
