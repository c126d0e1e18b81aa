use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::core::error::CompatibilityError;

/// Textual representation of one user, fed to the model as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Profile(String);

impl Profile {
    /// Wrap a profile text block, rejecting empty or whitespace-only input
    pub fn new(text: impl Into<String>) -> Result<Self, CompatibilityError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CompatibilityError::Argument(
                "profile text must not be empty".to_string(),
            ));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Profile {
    type Error = CompatibilityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Profile::new(value)
    }
}

impl From<Profile> for String {
    fn from(profile: Profile) -> Self {
        profile.0
    }
}

impl AsRef<str> for Profile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structured profile attributes, as collected during onboarding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSheet {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub display_name: Option<String>,
    #[validate(range(min = 18, max = 120))]
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[validate(length(max = 4000))]
    #[serde(default)]
    pub bio: Option<String>,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub interests: Vec<String>,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub answers: Vec<ProfileAnswer>,
}

/// Answer to an onboarding question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnswer {
    pub question: String,
    pub answer: String,
}

/// Pair of profiles to compare. Built per request and consumed once.
#[derive(Debug, Clone)]
pub struct CompatibilityRequest {
    pub profile1: Profile,
    pub profile2: Profile,
}

/// Validated compatibility scores returned by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub global: u8,
    pub love: u8,
    pub friendship: u8,
    pub carnal: u8,
    pub insight: String,
}
