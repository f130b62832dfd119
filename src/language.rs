use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized language identifier, derived solely from a file's extension.
/// No content sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Java,
    Python,
    Javascript,
    Html,
    Css,
    Unknown,
}

// Adding a language means adding a row here, not a new match arm.
const EXTENSION_MAP: &[(&str, LanguageTag)] = &[
    ("java", LanguageTag::Java),
    ("py", LanguageTag::Python),
    ("js", LanguageTag::Javascript),
    ("html", LanguageTag::Html),
    ("css", LanguageTag::Css),
];

/// Maps a file extension to a language tag. Case-insensitive; an absent or
/// unrecognized extension yields `Unknown` rather than an error.
pub fn classify(extension: Option<&str>) -> LanguageTag {
    let Some(ext) = extension else {
        return LanguageTag::Unknown;
    };
    let ext = ext.to_lowercase();

    EXTENSION_MAP
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, tag)| *tag)
        .unwrap_or(LanguageTag::Unknown)
}

impl LanguageTag {
    pub fn is_supported(&self) -> bool {
        !matches!(self, LanguageTag::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LanguageTag::Java => "java",
            LanguageTag::Python => "python",
            LanguageTag::Javascript => "javascript",
            LanguageTag::Html => "html",
            LanguageTag::Css => "css",
            LanguageTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_extensions() {
        assert_eq!(classify(Some("java")), LanguageTag::Java);
        assert_eq!(classify(Some("py")), LanguageTag::Python);
        assert_eq!(classify(Some("js")), LanguageTag::Javascript);
        assert_eq!(classify(Some("html")), LanguageTag::Html);
        assert_eq!(classify(Some("css")), LanguageTag::Css);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify(Some("PY")), LanguageTag::Python);
        assert_eq!(classify(Some("Java")), LanguageTag::Java);
        assert_eq!(classify(Some("JS")), LanguageTag::Javascript);
        assert_eq!(classify(Some("HtMl")), LanguageTag::Html);
    }

    #[test]
    fn test_classify_unknown_inputs() {
        assert_eq!(classify(Some("txt")), LanguageTag::Unknown);
        assert_eq!(classify(Some("rs")), LanguageTag::Unknown);
        assert_eq!(classify(Some("")), LanguageTag::Unknown);
        assert_eq!(classify(None), LanguageTag::Unknown);
    }

    #[test]
    fn test_is_supported() {
        assert!(LanguageTag::Python.is_supported());
        assert!(LanguageTag::Java.is_supported());
        assert!(LanguageTag::Css.is_supported());
        assert!(!LanguageTag::Unknown.is_supported());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(LanguageTag::Javascript.to_string(), "javascript");
        assert_eq!(LanguageTag::Unknown.to_string(), "unknown");
    }
}
