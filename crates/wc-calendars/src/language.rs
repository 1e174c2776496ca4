//! Language in which holiday names are reported.

use std::str::FromStr;

use wc_core::errors::{Error, Result};

/// Language of holiday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// Lithuanian (the official names).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "lt"))]
    Lithuanian,
    /// English translations.
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
}

impl Language {
    /// Two-letter ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Lithuanian => "lt",
            Language::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lt" | "lithuanian" => Ok(Language::Lithuanian),
            "en" | "en_us" | "english" => Ok(Language::English),
            other => Err(Error::Parse(format!(
                "unsupported language {other:?} (expected lt or en)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!("LT".parse::<Language>().unwrap(), Language::Lithuanian);
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert!("lv".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Lithuanian);
    }
}
