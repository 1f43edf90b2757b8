use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A Riot ID split into its name and tag, both lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerHandle {
    name: String,
    tag: String,
}

impl PlayerHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Case-insensitive comparison against a name/tag pair as reported by the API.
    pub fn matches(&self, name: &str, tag: &str) -> bool {
        name.to_lowercase() == self.name && tag.to_lowercase() == self.tag
    }
}

impl FromStr for PlayerHandle {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split('#');
        let (Some(name), Some(tag), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(AppError::InvalidFormat);
        };

        let (name, tag) = (name.trim(), tag.trim());
        if name.is_empty() || tag.is_empty() {
            return Err(AppError::InvalidFormat);
        }

        Ok(Self {
            name: name.to_lowercase(),
            tag: tag.to_lowercase(),
        })
    }
}

impl fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.tag)
    }
}

/// Shard code returned by the account lookup (`na`, `eu`, `ap`, `kr`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    /// `None` for a blank code.
    pub fn new(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn display_name(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
