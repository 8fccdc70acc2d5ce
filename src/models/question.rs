// src/models/question.rs

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{error::AppError, utils::html::clean_html};

/// One multiple-choice question. Immutable once the bank is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_answer_is_an_option))]
pub struct Question {
    /// The text of the question. May carry light markup (<b>, <em>), sanitized on load.
    #[validate(length(min = 1, max = 1000))]
    pub prompt: String,

    /// Choices in display order.
    #[validate(length(min = 2, max = 8), custom(function = validate_options))]
    pub options: Vec<String>,

    /// The correct choice. Must equal one of `options` exactly.
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
}

/// DTO for sending a question to clients (excludes the answer).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    /// 1-based position in the bank.
    pub number: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

fn validate_options(options: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for opt in options {
        if opt.trim().is_empty() {
            return Err(ValidationError::new("option_cannot_be_empty"));
        }
        if opt.len() > 500 {
            return Err(ValidationError::new("option_too_long"));
        }
        if !seen.insert(opt.as_str()) {
            return Err(ValidationError::new("duplicate_option"));
        }
    }
    Ok(())
}

fn validate_answer_is_an_option(question: &Question) -> Result<(), ValidationError> {
    if question.options.iter().any(|opt| opt == &question.answer) {
        Ok(())
    } else {
        Err(ValidationError::new("answer_not_in_options"))
    }
}

/// Ordered, non-empty list of questions shared by every session.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validates every question and sanitizes prompts.
    pub fn new(questions: Vec<Question>) -> Result<Self, AppError> {
        if questions.is_empty() {
            return Err(AppError::BadRequest(
                "Question bank must contain at least one question".to_string(),
            ));
        }

        let mut cleaned = Vec::with_capacity(questions.len());
        for (idx, mut question) in questions.into_iter().enumerate() {
            question.validate().map_err(|e| {
                AppError::BadRequest(format!("Question {} is invalid: {}", idx + 1, e))
            })?;
            question.prompt = clean_html(&question.prompt);
            cleaned.push(question);
        }

        Ok(Self { questions: cleaned })
    }

    /// The three questions shipped with the booth.
    pub fn builtin() -> Self {
        let q = |prompt: &str, options: [&str; 4], answer: &str| Question {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
        };

        Self {
            questions: vec![
                q(
                    "In what year was our school founded?",
                    ["1985", "1990", "2000", "2004"],
                    "2004",
                ),
                q(
                    "How many bits are there in one byte?",
                    ["4 bits", "8 bits", "16 bits", "32 bits"],
                    "8 bits",
                ),
                q(
                    "Which language is this quiz written in?",
                    ["Ruby", "Java", "Rust", "C++"],
                    "Rust",
                ),
            ],
        }
    }

    /// Parses a JSON array of `{prompt, options, answer}` objects.
    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let questions: Vec<Question> = serde_json::from_str(raw)?;
        Self::new(questions)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn public_questions(&self) -> Vec<PublicQuestion> {
        self.questions
            .iter()
            .enumerate()
            .map(|(idx, q)| PublicQuestion {
                number: idx + 1,
                prompt: q.prompt.clone(),
                options: q.options.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], answer: &str) -> Question {
        Question {
            prompt: "Pick one".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 3);
        for idx in 0..bank.len() {
            let q = bank.get(idx).unwrap();
            assert!(q.validate().is_ok(), "question {} invalid", idx + 1);
        }
    }

    #[test]
    fn answer_must_be_one_of_the_options() {
        assert!(question(&["A", "B"], "A").validate().is_ok());
        assert!(question(&["A", "B"], "C").validate().is_err());
    }

    #[test]
    fn duplicate_or_blank_options_are_rejected() {
        assert!(question(&["A", "A"], "A").validate().is_err());
        assert!(question(&["A", "  "], "A").validate().is_err());
        assert!(question(&["A"], "A").validate().is_err());
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert!(matches!(
            QuestionBank::new(Vec::new()),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn json_bank_keeps_order_and_strips_scripts() {
        let raw = r#"[
            {"prompt": "<b>First</b><script>alert(1)</script>", "options": ["x", "y"], "answer": "y"},
            {"prompt": "Second", "options": ["p", "q", "r"], "answer": "p"}
        ]"#;
        let bank = QuestionBank::from_json_str(raw).unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(0).unwrap().prompt, "<b>First</b>");
        assert_eq!(bank.get(1).unwrap().options, vec!["p", "q", "r"]);
        assert!(bank.get(2).is_none());
    }

    #[test]
    fn missing_bank_file_is_an_internal_error() {
        let missing = Path::new("no/such/questions.json");
        assert!(matches!(
            QuestionBank::from_json_file(missing),
            Err(AppError::InternalServerError(_))
        ));
    }

    #[test]
    fn public_questions_hide_answers() {
        let public = QuestionBank::builtin().public_questions();
        assert_eq!(public[0].number, 1);
        let json = serde_json::to_value(&public).unwrap();
        assert!(json[0].get("answer").is_none());
    }
}
