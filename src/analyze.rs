use tracing::debug;

use crate::client::{AnalysisError, CompletionClient};
use crate::language::{classify, LanguageTag};
use crate::prompt::AnalysisRequest;

/// What an editor or other caller hands us: the document text, an optional
/// selection, and the file's extension if the document has a backing path.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub file_extension: Option<String>,
    pub text: String,
    pub selection: Option<String>,
}

impl AnalysisInput {
    /// The selection when one exists, otherwise the whole document.
    pub fn effective_source(&self) -> &str {
        self.selection.as_deref().unwrap_or(&self.text)
    }

    pub fn language(&self) -> LanguageTag {
        classify(self.file_extension.as_deref())
    }
}

/// Runs the full pipeline: classify, refuse unsupported languages before any
/// request is built, build the prompt, dispatch, and hand back the raw
/// response body.
pub async fn analyze(
    input: &AnalysisInput,
    client: &CompletionClient,
) -> Result<String, AnalysisError> {
    let tag = input.language();
    if !tag.is_supported() {
        debug!(
            extension = input.file_extension.as_deref().unwrap_or("<none>"),
            "skipping analysis for unsupported language"
        );
        return Err(AnalysisError::UnsupportedLanguage(
            input
                .file_extension
                .clone()
                .unwrap_or_else(|| "no file extension".to_string()),
        ));
    }

    let request = AnalysisRequest::new(input.effective_source(), tag)?;
    let prompt = request.to_prompt();

    debug!(language = %tag, source_len = request.source().len(), "analyzing source");
    client.complete(&prompt).await
}
