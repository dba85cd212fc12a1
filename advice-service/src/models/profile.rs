//! The health profile a user submits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language the advice should be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Bengali,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's basic health profile.
///
/// Fields are kept as the text the user typed. `weight` (kg) and `height`
/// (cm) may be empty. The core does not validate anything here; callers
/// must ensure `age` and `condition` are present before asking for advice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub location: String,
    pub condition: String,
    #[serde(default)]
    pub language: Language,
}
