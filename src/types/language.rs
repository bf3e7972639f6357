use std::fmt;

#[cfg(not(target_arch = "wasm32"))]
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language hint sent with every analysis request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(not(target_arch = "wasm32"), derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Let the backend detect it
    #[default]
    Auto,
    /// English
    En,
    /// Arabic
    Ar,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Auto => "auto",
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Parse a select control's value. Unknown values fall back to `Auto`.
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            "ar" => Language::Ar,
            _ => Language::Auto,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(Language::from_value("en"), Language::En);
        assert_eq!(Language::from_value(" AR "), Language::Ar);
        assert_eq!(Language::from_value("auto"), Language::Auto);
        assert_eq!(Language::from_value("fr"), Language::Auto);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        assert_eq!(serde_json::to_string(&Language::Auto).unwrap(), "\"auto\"");
    }
}
