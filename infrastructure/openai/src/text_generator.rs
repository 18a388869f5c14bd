use async_trait::async_trait;
use serde_json::json;

use business::domain::advice::errors::AdviceError;
use business::domain::advice::services::TextGeneratorService;

use crate::client::OpenAIClient;

const MODEL: &str = "gpt-4o";
const TEMPERATURE: f64 = 0.7;

/// Chat-completions-backed implementation of the text generation port.
///
/// Any transport, status or response-shape failure maps to
/// `AdviceError::GenerationFailed`; the caller owns the fallback.
pub struct TextGeneratorOpenAI {
    client: OpenAIClient,
}

impl TextGeneratorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn extract_content(data: &serde_json::Value) -> Option<String> {
        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())?;
        Some(content.trim().to_string())
    }
}

#[async_trait]
impl TextGeneratorService for TextGeneratorOpenAI {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, AdviceError> {
        let body = json!({
            "model": MODEL,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt},
            ],
            "temperature": TEMPERATURE,
            "max_tokens": max_tokens,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| AdviceError::GenerationFailed)?;

        if !response.status().is_success() {
            return Err(AdviceError::GenerationFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| AdviceError::GenerationFailed)?;

        Self::extract_content(&data).ok_or(AdviceError::GenerationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_extract_first_choice_content() {
        let data = json!({
            "choices": [
                {"message": {"role": "assistant", "content": "  Try the Merlot.  "}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        });

        assert_eq!(
            TextGeneratorOpenAI::extract_content(&data),
            Some("Try the Merlot.".to_string())
        );
    }

    #[test]
    fn should_return_none_for_unexpected_shape() {
        assert_eq!(TextGeneratorOpenAI::extract_content(&json!({})), None);
        assert_eq!(
            TextGeneratorOpenAI::extract_content(&json!({"choices": []})),
            None
        );
        assert_eq!(
            TextGeneratorOpenAI::extract_content(&json!({"choices": [{"message": {}}]})),
            None
        );
    }
}
