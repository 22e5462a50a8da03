use crate::error::model_error::ModelError;

use common::ErrorLocation;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of characters in a normalized region code.
pub const REGION_CODE_LEN: usize = 2;

/// A validated two-letter region code (e.g. `TX`).
///
/// Raw input is trimmed and uppercased; the result must be exactly
/// [`REGION_CODE_LEN`] characters. Only the length is checked: the upstream
/// service decides whether the code names a real area.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode(String);

impl RegionCode {
    /// Normalize and validate raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Validation`] if the trimmed input is empty or
    /// its uppercased form is not exactly two characters long.
    #[track_caller]
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let normalized = raw.trim().to_uppercase();

        if normalized.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Region code is required"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let length = normalized.chars().count();
        if length != REGION_CODE_LEN {
            return Err(ModelError::Validation {
                message: format!(
                    "Region code must be exactly {REGION_CODE_LEN} characters, got {length}: '{normalized}'"
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(normalized))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RegionCode {
    type Err = ModelError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RegionCode {
    type Error = ModelError;

    #[track_caller]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.0
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for RegionCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(&self.0)
    }
}
