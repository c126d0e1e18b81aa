use crate::core::error::CompatibilityError;
use crate::models::{Profile, ProfileSheet};

/// Render a structured profile into the text block the prompt expects
///
/// Blank attributes are skipped. A sheet with nothing to say is an
/// argument error, same as an empty text profile.
pub fn render_profile(sheet: &ProfileSheet) -> Result<Profile, CompatibilityError> {
    let mut out = String::new();

    push_line(&mut out, "Name", sheet.display_name.as_deref());
    if let Some(age) = sheet.age {
        out.push_str(&format!("Age: {}\n", age));
    }
    push_line(&mut out, "Gender", sheet.gender.as_deref());
    push_line(&mut out, "Location", sheet.location.as_deref());
    push_line(&mut out, "Bio", sheet.bio.as_deref());

    let interests: Vec<&str> = sheet
        .interests
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .collect();
    if !interests.is_empty() {
        out.push_str(&format!("Interests: {}\n", interests.join(", ")));
    }

    let answers: Vec<_> = sheet
        .answers
        .iter()
        .filter(|a| !a.question.trim().is_empty() && !a.answer.trim().is_empty())
        .collect();
    if !answers.is_empty() {
        out.push_str("Answers:\n");
        for a in answers {
            out.push_str(&format!("- {} {}\n", a.question.trim(), a.answer.trim()));
        }
    }

    Profile::new(out.trim_end().to_string())
        .map_err(|_| CompatibilityError::Argument("profile sheet has no content".to_string()))
}

fn push_line(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
        out.push_str(&format!("{}: {}\n", label, v));
    }
}
