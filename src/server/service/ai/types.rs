use serde::{Deserialize, Serialize};

use crate::server::error::ai::AiError;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Sampling parameters sent with every request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ModelParams {
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1024,
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
        }
    }
}

impl ModelParams {
    fn validate(&self) -> Result<(), AiError> {
        check_range("temperature", self.temperature, 0.0, 2.0)?;
        if self.max_tokens == 0 {
            return Err(AiError::Configuration(
                "max_tokens must be at least 1".to_string(),
            ));
        }
        if let Some(top_p) = self.top_p {
            check_range("top_p", top_p, 0.0, 1.0)?;
        }
        if let Some(penalty) = self.frequency_penalty {
            check_range("frequency_penalty", penalty, -2.0, 2.0)?;
        }
        if let Some(penalty) = self.presence_penalty {
            check_range("presence_penalty", penalty, -2.0, 2.0)?;
        }
        Ok(())
    }
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<(), AiError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AiError::Configuration(format!(
            "{} must be between {} and {}, got {}",
            name, min, max, value
        )))
    }
}

/// Structured-output request: the model must answer with JSON matching `schema`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
    pub json_schema: JsonSchemaFormat,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub strict: bool,
    pub schema: serde_json::Value,
}

impl ResponseFormat {
    pub fn json_schema(name: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            kind: "json_schema".to_string(),
            json_schema: JsonSchemaFormat {
                name: name.into(),
                strict: true,
                schema,
            },
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(flatten)]
    pub params: ModelParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            params: ModelParams::default(),
            response_format: None,
        }
    }

    pub fn with_params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    /// Checks the request shape before anything is sent.
    pub fn validate(&self) -> Result<(), AiError> {
        if self.model.trim().is_empty() {
            return Err(AiError::Configuration("model name is empty".to_string()));
        }
        if self.messages.is_empty() {
            return Err(AiError::Configuration(
                "at least one message is required".to_string(),
            ));
        }
        if let Some(index) = self
            .messages
            .iter()
            .position(|message| message.content.trim().is_empty())
        {
            return Err(AiError::Configuration(format!(
                "message {} has empty content",
                index
            )));
        }
        self.params.validate()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Choice {
    pub index: u32,
    pub message: AssistantMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AssistantMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatCompletion {
    /// Parses and validates a raw response body.
    ///
    /// Non-JSON bodies and responses without choices are format errors. JSON that does
    /// not have the chat-completion shape is a schema validation error.
    pub fn parse(body: &str) -> Result<Self, AiError> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| AiError::ResponseFormat(format!("body is not JSON: {}", e)))?;

        let completion: ChatCompletion = serde_json::from_value(value)
            .map_err(|e| AiError::SchemaValidation(e.to_string()))?;

        if completion.object != "chat.completion" {
            return Err(AiError::SchemaValidation(format!(
                "unexpected object type '{}'",
                completion.object
            )));
        }
        if let Some(choice) = completion
            .choices
            .iter()
            .find(|choice| choice.message.role != "assistant")
        {
            return Err(AiError::SchemaValidation(format!(
                "unexpected message role '{}'",
                choice.message.role
            )));
        }
        if completion.choices.is_empty() {
            return Err(AiError::ResponseFormat(
                "response contains no choices".to_string(),
            ));
        }

        Ok(completion)
    }

    /// Content of the first choice.
    pub fn content(&self) -> &str {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or_default()
    }

    pub fn total_tokens(&self) -> Option<u32> {
        self.usage.map(|usage| usage.total_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completion_body(content: &str) -> String {
        json!({
            "id": "gen-1",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "test/model",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        })
        .to_string()
    }

    #[test]
    fn serializes_request_with_flattened_params_and_schema_format() {
        let request = ChatRequest::new("test/model", vec![ChatMessage::user("hi")])
            .with_response_format(ResponseFormat::json_schema("flashcards", json!({})));

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["max_tokens"], 1024);
        assert_eq!(value["response_format"]["type"], "json_schema");
        assert_eq!(value["response_format"]["json_schema"]["strict"], true);
        assert!(value.get("top_p").is_none());
    }

    #[test]
    fn rejects_empty_messages_and_out_of_range_params() {
        let empty = ChatRequest::new("test/model", vec![]);
        assert!(matches!(empty.validate(), Err(AiError::Configuration(_))));

        let blank = ChatRequest::new("test/model", vec![ChatMessage::user("  ")]);
        assert!(matches!(blank.validate(), Err(AiError::Configuration(_))));

        let hot = ChatRequest::new("test/model", vec![ChatMessage::user("hi")]).with_params(
            ModelParams {
                temperature: 3.0,
                ..ModelParams::default()
            },
        );
        assert!(matches!(hot.validate(), Err(AiError::Configuration(_))));
    }

    #[test]
    fn parses_valid_completion() {
        let completion = ChatCompletion::parse(&completion_body("hello")).unwrap();

        assert_eq!(completion.content(), "hello");
        assert_eq!(completion.total_tokens(), Some(15));
    }

    #[test]
    fn distinguishes_format_and_schema_failures() {
        assert!(matches!(
            ChatCompletion::parse("<html>oops</html>"),
            Err(AiError::ResponseFormat(_))
        ));
        assert!(matches!(
            ChatCompletion::parse(r#"{"unexpected":true}"#),
            Err(AiError::SchemaValidation(_))
        ));

        let wrong_object = completion_body("x").replace("chat.completion", "text_completion");
        assert!(matches!(
            ChatCompletion::parse(&wrong_object),
            Err(AiError::SchemaValidation(_))
        ));
    }
}
