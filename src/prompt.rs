use crate::client::AnalysisError;
use crate::language::LanguageTag;
use std::fmt;

/// A validated analysis request. Construction fails for unsupported
/// languages, so a request in hand always refers to a known language.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    source: String,
    tag: LanguageTag,
}

/// Text payload sent to the model. Opaque to everything but the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

// Languages without a row fall back to DEFAULT_TEMPLATE.
const TEMPLATES: &[(LanguageTag, &str)] = &[
    (LanguageTag::Java, "Analyze Java: "),
    (LanguageTag::Python, "Analyze Python: "),
    (LanguageTag::Javascript, "Analyze JS: "),
];

const DEFAULT_TEMPLATE: &str = "Analyze: ";

impl AnalysisRequest {
    pub fn new(source: impl Into<String>, tag: LanguageTag) -> Result<Self, AnalysisError> {
        if !tag.is_supported() {
            return Err(AnalysisError::UnsupportedLanguage(tag.to_string()));
        }
        Ok(Self {
            source: source.into(),
            tag,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tag(&self) -> LanguageTag {
        self.tag
    }

    /// Builds the model-ready prompt: the language-specific prefix followed
    /// by the source text verbatim. No truncation happens here; size limits
    /// are the caller's policy.
    pub fn to_prompt(&self) -> Prompt {
        build_prompt(self)
    }
}

pub fn build_prompt(request: &AnalysisRequest) -> Prompt {
    let prefix = TEMPLATES
        .iter()
        .find(|(tag, _)| *tag == request.tag)
        .map(|(_, template)| *template)
        .unwrap_or(DEFAULT_TEMPLATE);

    Prompt(format!("{}{}", prefix, request.source))
}

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn prompt_for(source: &str, tag: LanguageTag) -> String {
        AnalysisRequest::new(source, tag)
            .unwrap()
            .to_prompt()
            .as_str()
            .to_string()
    }

    #[test]
    fn test_specialized_templates() {
        assert_eq!(prompt_for("class A {}", LanguageTag::Java), "Analyze Java: class A {}");
        assert_eq!(prompt_for("def f(): pass", LanguageTag::Python), "Analyze Python: def f(): pass");
        assert_eq!(prompt_for("let x = 1;", LanguageTag::Javascript), "Analyze JS: let x = 1;");
    }

    #[test]
    fn test_fallback_template() {
        assert_eq!(prompt_for("<p>hi</p>", LanguageTag::Html), "Analyze: <p>hi</p>");
        assert_eq!(prompt_for("a { color: red }", LanguageTag::Css), "Analyze: a { color: red }");
    }

    #[test]
    fn test_source_is_not_modified() {
        let source = "line1\n\tline2 \"quoted\" \\backslash";
        let prompt = prompt_for(source, LanguageTag::Python);
        assert_eq!(prompt, format!("Analyze Python: {}", source));
    }

    #[test]
    fn test_quotes_survive_in_prompt() {
        let prompt = prompt_for(r#"He said "hi""#, LanguageTag::Java);
        assert_eq!(prompt, r#"Analyze Java: He said "hi""#);
    }

    #[test]
    fn test_unsupported_language_refused() {
        let result = AnalysisRequest::new("plain text", LanguageTag::Unknown);
        assert!(matches!(result, Err(AnalysisError::UnsupportedLanguage(_))));
    }
}
