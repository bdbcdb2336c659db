use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MALAYSIA_CALLING_CODE: &str = "60";
const MAX_CALLING_CODE_DIGITS: usize = 3;

/// International calling code, stored as bare digits.
///
/// Accepts both `"+60"` and `"60"`; displays with the leading `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let valid = !digits.is_empty()
            && digits.len() <= MAX_CALLING_CODE_DIGITS
            && digits.chars().all(|ch| ch.is_ascii_digit())
            && !digits.starts_with('0');
        if !valid {
            return Err(CoreError::InvalidCountryCode(raw.to_string()));
        }
        Ok(Self(digits.to_string()))
    }

    pub fn malaysia() -> Self {
        Self(MALAYSIA_CALLING_CODE.to_string())
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn with_plus(&self) -> String {
        format!("+{}", self.0)
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::malaysia()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

impl FromStr for CountryCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.to_string()
    }
}
