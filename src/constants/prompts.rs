/// Marker replaced with the page text in [`STUDY_PAGE_PROMPT`].
pub const PAGE_CONTENT_MARKER: &str = "{page_content}";

pub const STUDY_PAGE_PROMPT: &str = r#"
You are an expert in mathematics and statistics. Your task is to explain the content on the given page, provide a relevant example, and create a mini test with solutions.

Page Content: {page_content}

I want the response in the following structured format:
{"Explanation": "", "Example": "", "Mini Test": "", "Test Solution": ""}
"#;

pub const QUESTION_PROMPT_PREFIX: &str =
    "Based on the content of the document, answer the following question:\n";

pub const NO_EXPLANATION: &str = "No explanation available.";
pub const NO_EXAMPLE: &str = "No example available.";
pub const NO_MINI_TEST: &str = "No mini test available.";
pub const NO_TEST_SOLUTION: &str = "No test solution available.";

/// Raw reply substituted whenever the model produced no usable text.
pub const EMPTY_RESPONSE_SENTINEL: &str = "{}";
