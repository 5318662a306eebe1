use serde::Deserialize;

use crate::{
    constants::prompts::{NO_EXAMPLE, NO_EXPLANATION, NO_MINI_TEST, NO_TEST_SOLUTION},
    errors::{AppError, AppResult},
    models::domain::PageResult,
};

/// Reply shape requested from the model. Every field may be missing.
#[derive(Debug, Deserialize)]
struct StudyReply {
    #[serde(rename = "Explanation")]
    explanation: Option<String>,
    #[serde(rename = "Example")]
    example: Option<String>,
    #[serde(rename = "Mini Test")]
    mini_test: Option<String>,
    #[serde(rename = "Test Solution")]
    test_solution: Option<String>,
}

/// Decodes a raw model reply into the result for `page` (1-based).
///
/// Missing keys are filled with their placeholder text. Anything that is not
/// a JSON object of string fields is a [`AppError::MalformedResponse`].
pub fn parse_response(raw: &str, page: usize) -> AppResult<PageResult> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| AppError::MalformedResponse(e.to_string()))?;
    if !value.is_object() {
        return Err(AppError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    }

    let reply: StudyReply =
        serde_json::from_value(value).map_err(|e| AppError::MalformedResponse(e.to_string()))?;

    Ok(PageResult {
        page,
        explanation: reply.explanation.unwrap_or_else(|| NO_EXPLANATION.to_string()),
        example: reply.example.unwrap_or_else(|| NO_EXAMPLE.to_string()),
        mini_test: reply.mini_test.unwrap_or_else(|| NO_MINI_TEST.to_string()),
        test_solution: reply
            .test_solution
            .unwrap_or_else(|| NO_TEST_SOLUTION.to_string()),
    })
}
