use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    constants::prompts::EMPTY_RESPONSE_SENTINEL,
    models::domain::Notices,
};

/// Outcome of one call to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Text(String),
    EmptyResponse,
    ServiceFailure(String),
}

impl Generation {
    /// Raw reply to hand to the response parser. Anything other than usable
    /// text is reported and replaced by the `"{}"` sentinel.
    pub fn into_raw(self, notices: &mut Notices) -> String {
        match self {
            Generation::Text(text) => text,
            Generation::EmptyResponse => {
                notices.error("Received an empty response from the model.");
                EMPTY_RESPONSE_SENTINEL.to_string()
            }
            Generation::ServiceFailure(message) => {
                notices.error(format!("Error while getting response from API: {}", message));
                EMPTY_RESPONSE_SENTINEL.to_string()
            }
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Sends one prompt. Never fails past this boundary: failures come back
    /// as [`Generation::ServiceFailure`].
    async fn generate(&self, prompt: &str) -> Generation;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl From<GenerateContentResponse> for Generation {
    /// Joins the text parts of the first candidate. A reply without any
    /// candidate (e.g. a blocked prompt) is a service failure; a candidate
    /// with no text is an empty response.
    fn from(response: GenerateContentResponse) -> Self {
        let Some(candidate) = response.candidates.into_iter().next() else {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Generation::ServiceFailure(format!("response has no text: {}", reason));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            Generation::EmptyResponse
        } else {
            Generation::Text(text)
        }
    }
}

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: SecretString,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.google_api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn request(&self, prompt: &str) -> Result<GenerateContentResponse, String> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(format!("{} {}", status, detail.trim()));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| format!("invalid response body: {}", e))
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Generation {
        log::debug!(
            "Sending {} char prompt to model {}",
            prompt.chars().count(),
            self.model
        );

        match self.request(prompt).await {
            Ok(response) => Generation::from(response),
            Err(message) => Generation::ServiceFailure(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::NoticeLevel;

    fn decode(body: &str) -> Generation {
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        Generation::from(response)
    }

    #[test]
    fn text_parts_of_first_candidate_are_joined() {
        let generation = decode(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"Explanation\":"},{"text":"\"e\"}"}],"role":"model"}},{"content":{"parts":[{"text":"ignored"}]}}]}"#,
        );
        assert_eq!(generation, Generation::Text("{\"Explanation\":\"e\"}".to_string()));
    }

    #[test]
    fn candidate_without_text_is_empty_response() {
        assert_eq!(
            decode(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#),
            Generation::EmptyResponse
        );
        assert_eq!(
            decode(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#),
            Generation::EmptyResponse
        );
    }

    #[test]
    fn blocked_prompt_is_service_failure_with_reason() {
        let generation = decode(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        assert_eq!(
            generation,
            Generation::ServiceFailure("response has no text: SAFETY".to_string())
        );
    }

    #[test]
    fn text_passes_through_unmodified() {
        let mut notices = Notices::new();
        let raw = Generation::Text(" {\"a\": 1} ".to_string()).into_raw(&mut notices);

        assert_eq!(raw, " {\"a\": 1} ");
        assert!(notices.is_empty());
    }

    #[test]
    fn empty_response_becomes_sentinel_with_error_notice() {
        let mut notices = Notices::new();
        let raw = Generation::EmptyResponse.into_raw(&mut notices);

        assert_eq!(raw, "{}");
        assert_eq!(notices.count(NoticeLevel::Error), 1);
    }

    #[test]
    fn service_failure_becomes_sentinel_and_reports_message() {
        let mut notices = Notices::new();
        let raw = Generation::ServiceFailure("quota exceeded".to_string()).into_raw(&mut notices);

        assert_eq!(raw, "{}");
        let notices = notices.into_vec();
        assert_eq!(
            notices[0].message,
            "Error while getting response from API: quota exceeded"
        );
    }

    #[test]
    fn endpoint_joins_base_url_and_model() {
        let mut config = Config::test_config();
        config.gemini_base_url = "https://example.test/v1beta/".to_string();
        let client = GeminiClient::new(&config);

        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[actix_web::test]
    async fn unreachable_service_is_reported_not_raised() {
        let client = GeminiClient::new(&Config::test_config());

        let generation = client.generate("hello").await;
        assert!(matches!(generation, Generation::ServiceFailure(_)));
    }

    #[actix_web::test]
    async fn mock_client_can_stand_in_for_the_service() {
        let mut mock = MockGenerationClient::new();
        mock.expect_generate()
            .withf(|prompt| prompt.contains("Page Content: hi"))
            .times(1)
            .returning(|_| Generation::EmptyResponse);

        let prompt = crate::services::prompt_builder::build_prompt("hi");
        assert_eq!(mock.generate(&prompt).await, Generation::EmptyResponse);
    }
}
