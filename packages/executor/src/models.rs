use common::Language;
use serde::{Deserialize, Serialize};

/// Pinned runtime version for each supported language.
///
/// Versions must exist on the target Piston instance; the API rejects
/// unknown language/version pairs.
pub fn runtime_version(language: Language) -> &'static str {
    match language {
        Language::Cpp => "10.2.0",
        Language::Java => "15.0.2",
        Language::Python => "3.10.0",
        Language::Javascript => "18.15.0",
    }
}

/// Request body of the execute endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub language: String,
    pub version: String,
    pub files: Vec<SourceFile>,
}

/// One source file sent for execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub content: String,
}

impl ExecuteRequest {
    /// Builds a single-file request with the pinned runtime for `language`.
    pub fn single_file(language: Language, source: impl Into<String>) -> Self {
        Self {
            language: language.as_str().to_string(),
            version: runtime_version(language).to_string(),
            files: vec![SourceFile {
                content: source.into(),
            }],
        }
    }
}

/// Response body of the execute endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteResponse {
    pub language: String,
    pub version: String,
    pub run: StageOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile: Option<StageOutput>,
}

/// Output of one execution stage (compile or run).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageOutput {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    /// Interleaved stdout and stderr, as captured by the runtime.
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub signal: Option<String>,
}
