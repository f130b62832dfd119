use std::fmt;

#[derive(Debug)]
pub enum AnalysisError {
    UnsupportedLanguage(String),
    Transport(String),
    Cancelled,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLanguage(what) => write!(f, "Unsupported language: {}", what),
            Self::Transport(msg) => write!(f, "Transport error: {}", msg),
            Self::Cancelled => write!(f, "Request cancelled"),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<reqwest::Error> for AnalysisError {
    fn from(error: reqwest::Error) -> Self {
        // Keep messages short and free of URLs that could embed credentials.
        let msg = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_connect() {
            "connection failed".to_string()
        } else {
            error.without_url().to_string()
        };
        AnalysisError::Transport(msg)
    }
}
