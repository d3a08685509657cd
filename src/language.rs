use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unknown language code: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Spanish,
    English,
    Portuguese,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Spanish,
        Language::English,
        Language::Portuguese,
        Language::Chinese,
    ];

    pub fn from_code(code: &str) -> Result<Self, LanguageError> {
        match code {
            "es" => Ok(Self::Spanish),
            "en" => Ok(Self::English),
            "pt" => Ok(Self::Portuguese),
            "zh" => Ok(Self::Chinese),
            _ => Err(LanguageError::Unknown(code.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::English => "en",
            Self::Portuguese => "pt",
            Self::Chinese => "zh",
        }
    }

    /// Short label shown on the selector trigger.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Spanish => "ES",
            Self::English => "EN",
            Self::Portuguese => "PT",
            Self::Chinese => "中文",
        }
    }

    /// Name shown in the dropdown, in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::Spanish => "Español",
            Self::English => "English",
            Self::Portuguese => "Português",
            Self::Chinese => "中文",
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Label for a raw language code. Unknown codes fall back to Spanish.
pub fn label_for(code: &str) -> &'static str {
    Language::from_code(code).unwrap_or_default().label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(label_for("es"), "ES");
        assert_eq!(label_for("en"), "EN");
        assert_eq!(label_for("pt"), "PT");
        assert_eq!(label_for("zh"), "中文");
    }

    #[test]
    fn test_unknown_falls_back_to_es() {
        assert_eq!(label_for("fr"), "ES");
        assert_eq!(label_for(""), "ES");
        assert_eq!(label_for("EN"), "ES");
        assert_eq!(
            Language::from_code("de"),
            Err(LanguageError::Unknown("de".to_string()))
        );
    }

    #[test]
    fn test_code_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
            assert_eq!(lang.to_string(), lang.code());
        }
    }
}
