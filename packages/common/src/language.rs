#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Programming language a solution is written in.
///
/// Only languages with a pinned runtime on the execution API are listed here;
/// anything else is rejected at the request boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "cpp"))]
    Cpp,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "java"))]
    Java,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "python"))]
    Python,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "javascript"))]
    Javascript,
}

impl Language {
    /// All supported languages.
    pub const ALL: &'static [Language] = &[Self::Cpp, Self::Java, Self::Python, Self::Javascript];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Python => "python",
            Self::Javascript => "javascript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Cpp
    }
}

/// Error when parsing an unsupported language string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    invalid: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported language '{}'. Valid values: {}",
            self.invalid,
            Language::ALL
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpp" => Ok(Self::Cpp),
            "java" => Ok(Self::Java),
            "python" => Ok(Self::Python),
            "javascript" => Ok(Self::Javascript),
            _ => Err(ParseLanguageError {
                invalid: s.to_string(),
            }),
        }
    }
}
