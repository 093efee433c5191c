#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty rating of a problem.
///
/// Stored and serialized in lowercase. Variants are declared easiest first,
/// so the derived ordering ranks by difficulty. When the `sea-orm` feature is
/// enabled, this enum can be used directly in SeaORM entities.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    utoipa::ToSchema,
)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "easy"))]
    Easy,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "medium"))]
    Medium,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "hard"))]
    Hard,
}

impl Difficulty {
    /// All possible difficulty values, in ascending order.
    pub const ALL: &'static [Difficulty] = &[Self::Easy, Self::Medium, Self::Hard];

    /// Returns the string representation (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an invalid difficulty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError {
    invalid: String,
}

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid difficulty '{}'. Valid values: {}",
            self.invalid,
            Difficulty::ALL
                .iter()
                .map(|d| d.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Case-insensitive, so both "Easy" and "easy" parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError {
                invalid: s.to_string(),
            }),
        }
    }
}
