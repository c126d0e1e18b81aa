use crate::core::error::CompatibilityError;

/// Build the instruction text sent to the model for two profiles
///
/// Both profiles are inserted verbatim. The model is told to answer with a
/// bare JSON object holding four integer scores and a short insight.
pub fn build_prompt(profile1: &str, profile2: &str) -> Result<String, CompatibilityError> {
    if profile1.trim().is_empty() {
        return Err(CompatibilityError::Argument(
            "profile1 must not be empty".to_string(),
        ));
    }
    if profile2.trim().is_empty() {
        return Err(CompatibilityError::Argument(
            "profile2 must not be empty".to_string(),
        ));
    }

    Ok(format!(
        r#"You are a relationship compatibility analyst for a dating app.
Compare the two user profiles below and estimate how compatible these two people are.

### Profile 1
{profile1}

### Profile 2
{profile2}

Score the pair on four dimensions, each an integer percentage from 0 to 100:
- "global": overall compatibility
- "love": potential for a romantic relationship
- "friendship": potential for a friendship
- "carnal": physical and sexual chemistry

Then write "insight": one or two short sentences explaining the scores.

Answer with strict JSON only: a single object with exactly the keys "global", "love", "friendship", "carnal" and "insight".
Do not wrap it in markdown or code fences and do not add any text before or after it.
Example: {{"global": 72, "love": 68, "friendship": 80, "carnal": 65, "insight": "Shared love of the outdoors, different social rhythms."}}"#,
        profile1 = profile1.trim(),
        profile2 = profile2.trim(),
    ))
}
