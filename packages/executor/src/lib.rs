pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::PistonClient;
pub use config::{DEFAULT_EXECUTE_URL, ExecutorConfig};
pub use error::ExecutorError;
pub use models::{ExecuteRequest, ExecuteResponse, SourceFile, StageOutput, runtime_version};

use async_trait::async_trait;
use common::Language;

/// Abstraction over the remote code execution service.
///
/// The server depends on this trait rather than the concrete HTTP client so
/// tests can substitute a scripted executor.
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    /// Executes `source` under the pinned runtime for `language` and returns
    /// the raw stage outputs.
    async fn execute(
        &self,
        language: Language,
        source: &str,
    ) -> Result<ExecuteResponse, ExecutorError>;
}
