use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::{error::CompatibilityError, profile::render_profile};
use crate::models::domain::{CompatibilityRequest, Profile, ProfileSheet};

/// Upper bound on a single rendered profile, in characters
pub const MAX_PROFILE_CHARS: usize = 8000;

/// One side of a comparison: pre-rendered text or a structured sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileInput {
    Text(String),
    Sheet(ProfileSheet),
}

impl ProfileInput {
    /// Resolve into a validated profile text block
    ///
    /// `side` names the field in error messages (`profile1` / `profile2`).
    pub fn into_profile(self, side: &str) -> Result<Profile, CompatibilityError> {
        let profile = match self {
            ProfileInput::Text(text) => Profile::new(text),
            ProfileInput::Sheet(sheet) => {
                sheet
                    .validate()
                    .map_err(|e| CompatibilityError::Argument(e.to_string()))
                    .and_then(|_| render_profile(&sheet))
            }
        }
        .map_err(|e| match e {
            CompatibilityError::Argument(msg) => {
                CompatibilityError::Argument(format!("{}: {}", side, msg))
            }
            other => other,
        })?;

        if profile.as_str().chars().count() > MAX_PROFILE_CHARS {
            return Err(CompatibilityError::Argument(format!(
                "{}: profile exceeds {} characters",
                side, MAX_PROFILE_CHARS
            )));
        }

        Ok(profile)
    }
}

/// Request to evaluate the compatibility of two profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub profile1: ProfileInput,
    pub profile2: ProfileInput,
}

impl EvaluateRequest {
    pub fn into_request(self) -> Result<CompatibilityRequest, CompatibilityError> {
        Ok(CompatibilityRequest {
            profile1: self.profile1.into_profile("profile1")?,
            profile2: self.profile2.into_profile("profile2")?,
        })
    }
}
