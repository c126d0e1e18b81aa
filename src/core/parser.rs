use serde_json::{Map, Value};

use crate::core::error::{CompatibilityError, ScoreField};
use crate::models::CompatibilityResult;

const INSIGHT_KEY: &str = "insight";

/// Parse and validate raw model output into a compatibility result
///
/// Validation order:
/// 1. strict JSON parse (no code fence stripping)
/// 2. top-level object with every required key present
/// 3. each score an integer in [0, 100] (a float like `85.0` is accepted)
/// 4. insight a string that is non-empty once trimmed
pub fn parse_compatibility(raw: &str) -> Result<CompatibilityResult, CompatibilityError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| CompatibilityError::MalformedResponse(e.to_string()))?;

    let obj = value.as_object().ok_or_else(|| {
        CompatibilityError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_type(&value)
        ))
    })?;

    for key in ScoreField::ALL.iter().map(|f| f.key()).chain([INSIGHT_KEY]) {
        if !obj.contains_key(key) {
            return Err(CompatibilityError::MissingField(key));
        }
    }

    let global = score(obj, ScoreField::Global)?;
    let love = score(obj, ScoreField::Love)?;
    let friendship = score(obj, ScoreField::Friendship)?;
    let carnal = score(obj, ScoreField::Carnal)?;

    let insight = match &obj[INSIGHT_KEY] {
        Value::String(s) => s.trim(),
        other => {
            return Err(CompatibilityError::MalformedResponse(format!(
                "field `insight` must be a string, got {}",
                json_type(other)
            )))
        }
    };
    if insight.is_empty() {
        return Err(CompatibilityError::EmptyInsight);
    }

    Ok(CompatibilityResult {
        global,
        love,
        friendship,
        carnal,
        insight: insight.to_string(),
    })
}

/// Extract one score, accepting only lossless integers in [0, 100]
fn score(obj: &Map<String, Value>, field: ScoreField) -> Result<u8, CompatibilityError> {
    let value = &obj[field.key()];
    let out_of_range = || CompatibilityError::OutOfRangeScore {
        field,
        value: value.to_string(),
    };

    let n = match value {
        Value::Number(n) => n,
        _ => return Err(out_of_range()),
    };

    let int = if let Some(i) = n.as_i64() {
        i
    } else if let Some(f) = n.as_f64() {
        if !f.is_finite() || f.fract() != 0.0 || f < i64::MIN as f64 || f > i64::MAX as f64 {
            return Err(out_of_range());
        }
        f as i64
    } else {
        // u64 above i64::MAX
        return Err(out_of_range());
    };

    if (0..=100).contains(&int) {
        Ok(int as u8)
    } else {
        Err(out_of_range())
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
