use serde::{Deserialize, Serialize};

/// Study material generated for one page. Serialized with the same keys
/// the model is asked to produce, plus the 1-based page number.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageResult {
    #[serde(rename = "Page")]
    pub page: usize,
    #[serde(rename = "Explanation")]
    pub explanation: String,
    #[serde(rename = "Example")]
    pub example: String,
    #[serde(rename = "Mini Test")]
    pub mini_test: String,
    #[serde(rename = "Test Solution")]
    pub test_solution: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_result_serializes_with_display_keys() {
        let result = PageResult {
            page: 2,
            explanation: "e".to_string(),
            example: "x".to_string(),
            mini_test: "q".to_string(),
            test_solution: "a".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["Page"], 2);
        assert_eq!(value["Mini Test"], "q");
        assert_eq!(value["Test Solution"], "a");
    }
}
