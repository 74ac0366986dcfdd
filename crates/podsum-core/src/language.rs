use serde::{Deserialize, Serialize};

/// Output language for the generated summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Hebrew,
}

/// Composition direction of the summary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl Language {
    pub fn parse(input: &str) -> Option<Language> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "english" | "en" => Some(Language::English),
            "hebrew" | "he" | "iw" | "עברית" => Some(Language::Hebrew),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hebrew => "Hebrew / עברית",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hebrew => "he",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Language::English => TextDirection::LeftToRight,
            Language::Hebrew => TextDirection::RightToLeft,
        }
    }
}
