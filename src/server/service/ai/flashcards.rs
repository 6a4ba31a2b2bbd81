use serde::Deserialize;
use serde_json::json;

use crate::server::{
    error::ai::AiError,
    service::ai::types::{ChatMessage, ChatRequest, ModelParams, ResponseFormat},
};

pub const MAX_QUESTION_CHARS: usize = 200;
pub const MAX_ANSWER_CHARS: usize = 500;

/// A question/answer pair produced by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCard {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize)]
struct FlashcardsPayload {
    flashcards: Vec<FlashcardEntry>,
}

#[derive(Deserialize)]
struct FlashcardEntry {
    question: String,
    answer: String,
}

/// JSON schema pinning the answer to exactly `count` flashcards.
pub fn flashcards_schema(count: usize) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "flashcards": {
                "type": "array",
                "minItems": count,
                "maxItems": count,
                "items": {
                    "type": "object",
                    "properties": {
                        "question": { "type": "string", "maxLength": MAX_QUESTION_CHARS },
                        "answer": { "type": "string", "maxLength": MAX_ANSWER_CHARS }
                    },
                    "required": ["question", "answer"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["flashcards"],
        "additionalProperties": false
    })
}

/// Builds the structured-output request for `count` cards from `input_text`.
pub fn build_request(model: &str, input_text: &str, count: usize) -> ChatRequest {
    let system = format!(
        "You are an assistant that writes study flashcards. From the text provided by the \
         user, create exactly {count} flashcards. Each question must be at most \
         {MAX_QUESTION_CHARS} characters and each answer at most {MAX_ANSWER_CHARS} \
         characters. Answer only with JSON of the form \
         {{\"flashcards\": [{{\"question\": \"...\", \"answer\": \"...\"}}]}}."
    );

    // Room for the requested cards at their maximum length, within provider limits.
    let max_tokens = (count as u32).saturating_mul(256).clamp(1024, 16_384);

    ChatRequest::new(
        model,
        vec![ChatMessage::system(system), ChatMessage::user(input_text)],
    )
    .with_params(ModelParams {
        max_tokens,
        ..ModelParams::default()
    })
    .with_response_format(ResponseFormat::json_schema(
        "flashcards",
        flashcards_schema(count),
    ))
}

/// Parses the assistant content into exactly `expected` cards.
///
/// Code fences around the JSON are tolerated. Over-long texts are truncated to the
/// card column limits. Blank entries or a different card count are schema failures.
pub fn parse_flashcards(content: &str, expected: usize) -> Result<Vec<GeneratedCard>, AiError> {
    let json = strip_code_fence(content);

    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| AiError::ResponseFormat(format!("flashcards are not JSON: {}", e)))?;
    let payload: FlashcardsPayload = serde_json::from_value(value)
        .map_err(|e| AiError::SchemaValidation(format!("flashcards payload: {}", e)))?;

    if payload.flashcards.len() != expected {
        return Err(AiError::SchemaValidation(format!(
            "expected {} flashcards, got {}",
            expected,
            payload.flashcards.len()
        )));
    }

    payload
        .flashcards
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let question = truncate_chars(entry.question.trim(), MAX_QUESTION_CHARS);
            let answer = truncate_chars(entry.answer.trim(), MAX_ANSWER_CHARS);
            if question.is_empty() || answer.is_empty() {
                return Err(AiError::SchemaValidation(format!(
                    "flashcard {} has an empty question or answer",
                    index
                )));
            }
            Ok(GeneratedCard { question, answer })
        })
        .collect()
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_pins_item_count() {
        let schema = flashcards_schema(4);
        let items = &schema["properties"]["flashcards"];

        assert_eq!(items["minItems"], 4);
        assert_eq!(items["maxItems"], 4);
    }

    #[test]
    fn request_carries_system_prompt_and_user_text() {
        let request = build_request("test/model", "Photosynthesis converts light.", 3);

        assert_eq!(request.messages.len(), 2);
        assert!(request.messages[0].content.contains("exactly 3 flashcards"));
        assert_eq!(request.messages[1].content, "Photosynthesis converts light.");
        assert!(request.response_format.is_some());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn parses_fenced_payload() {
        let content = "```json\n{\"flashcards\":[{\"question\":\"Q1\",\"answer\":\"A1\"},{\"question\":\"Q2\",\"answer\":\"A2\"}]}\n```";

        let cards = parse_flashcards(content, 2).unwrap();

        assert_eq!(
            cards,
            vec![
                GeneratedCard {
                    question: "Q1".into(),
                    answer: "A1".into()
                },
                GeneratedCard {
                    question: "Q2".into(),
                    answer: "A2".into()
                },
            ]
        );
    }

    #[test]
    fn count_mismatch_is_schema_failure() {
        let content = r#"{"flashcards":[{"question":"Q1","answer":"A1"}]}"#;

        assert!(matches!(
            parse_flashcards(content, 2),
            Err(AiError::SchemaValidation(_))
        ));
    }

    #[test]
    fn blank_entries_are_schema_failures() {
        let content = r#"{"flashcards":[{"question":"  ","answer":"A1"}]}"#;

        assert!(matches!(
            parse_flashcards(content, 1),
            Err(AiError::SchemaValidation(_))
        ));
    }

    #[test]
    fn long_texts_are_truncated_to_column_limits() {
        let long_question = "q".repeat(250);
        let content = format!(
            r#"{{"flashcards":[{{"question":"{}","answer":"A"}}]}}"#,
            long_question
        );

        let cards = parse_flashcards(&content, 1).unwrap();

        assert_eq!(cards[0].question.chars().count(), MAX_QUESTION_CHARS);
    }
}
