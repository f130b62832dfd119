pub mod analyze;
pub mod client;
pub mod config;
pub mod language;
pub mod prompt;

// Re-export commonly used types
pub use analyze::{analyze, AnalysisInput};
pub use client::{AnalysisError, CompletionClient};
pub use config::ClientConfig;
pub use language::{classify, LanguageTag};
pub use prompt::{build_prompt, AnalysisRequest, Prompt};
