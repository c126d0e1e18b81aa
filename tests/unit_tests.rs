// Unit tests for Affinity

use affinity::core::{
    error::{CompatibilityError, ScoreField},
    parser::parse_compatibility,
    prompt::build_prompt,
};
use affinity::models::CompatibilityResult;

fn scores_json(global: i64, love: i64, friendship: i64, carnal: i64, insight: &str) -> String {
    serde_json::json!({
        "global": global,
        "love": love,
        "friendship": friendship,
        "carnal": carnal,
        "insight": insight,
    })
    .to_string()
}

#[test]
fn test_parse_round_trip() {
    let cases = [
        (0, 0, 0, 0, "No common ground at all."),
        (100, 100, 100, 100, "Made for each other."),
        (42, 17, 93, 61, "Better as friends. Different life goals."),
    ];

    for (global, love, friendship, carnal, insight) in cases {
        let raw = scores_json(global, love, friendship, carnal, insight);
        let result = parse_compatibility(&raw).unwrap();
        assert_eq!(
            result,
            CompatibilityResult {
                global: global as u8,
                love: love as u8,
                friendship: friendship as u8,
                carnal: carnal as u8,
                insight: insight.to_string(),
            }
        );
    }
}

#[test]
fn test_out_of_range_names_field() {
    for field in ScoreField::ALL {
        for bad in [-1i64, 101] {
            let mut value: serde_json::Value =
                serde_json::from_str(&scores_json(50, 50, 50, 50, "ok")).unwrap();
            value[field.key()] = serde_json::json!(bad);

            match parse_compatibility(&value.to_string()) {
                Err(CompatibilityError::OutOfRangeScore { field: got, value }) => {
                    assert_eq!(got, field);
                    assert_eq!(value, bad.to_string());
                }
                other => panic!("{} = {}: expected OutOfRangeScore, got {:?}", field, bad, other),
            }
        }
    }
}

#[test]
fn test_not_json_is_malformed() {
    assert!(matches!(
        parse_compatibility("not json"),
        Err(CompatibilityError::MalformedResponse(_))
    ));
    assert!(matches!(
        parse_compatibility(""),
        Err(CompatibilityError::MalformedResponse(_))
    ));
}

#[test]
fn test_empty_insight() {
    let raw = r#"{"global":85,"love":82,"friendship":88,"carnal":79,"insight":""}"#;
    assert!(matches!(
        parse_compatibility(raw),
        Err(CompatibilityError::EmptyInsight)
    ));
}

#[test]
fn test_unicode_insight() {
    let raw = r#"{"global":85,"love":82,"friendship":88,"carnal":79,"insight":"Great match! 🌍"}"#;
    let result = parse_compatibility(raw).unwrap();
    assert_eq!(result.global, 85);
    assert_eq!(result.love, 82);
    assert_eq!(result.friendship, 88);
    assert_eq!(result.carnal, 79);
    assert_eq!(result.insight, "Great match! 🌍");
}

#[test]
fn test_missing_field_checked_in_order() {
    let raw = r#"{"global":85,"friendship":88,"insight":"x"}"#;
    assert!(matches!(
        parse_compatibility(raw),
        Err(CompatibilityError::MissingField("love"))
    ));

    let raw = r#"{"global":85,"love":82,"friendship":88,"carnal":79}"#;
    assert!(matches!(
        parse_compatibility(raw),
        Err(CompatibilityError::MissingField("insight"))
    ));
}

#[test]
fn test_first_bad_score_wins() {
    let raw = r#"{"global":50,"love":150,"friendship":-3,"carnal":50,"insight":"x"}"#;
    match parse_compatibility(raw) {
        Err(CompatibilityError::OutOfRangeScore { field, .. }) => assert_eq!(field, ScoreField::Love),
        other => panic!("expected OutOfRangeScore, got {:?}", other),
    }
}

#[test]
fn test_parse_is_deterministic() {
    let raw = r#"{"global":85,"love":82,"friendship":88,"carnal":79,"insight":"  Trimmed.  "}"#;
    assert_eq!(parse_compatibility(raw).unwrap(), parse_compatibility(raw).unwrap());
    assert_eq!(parse_compatibility(raw).unwrap().insight, "Trimmed.");
}

#[test]
fn test_build_prompt_rejects_empty_profile() {
    assert!(matches!(
        build_prompt("", "profile2 text"),
        Err(CompatibilityError::Argument(_))
    ));
}

#[test]
fn test_build_prompt_is_pure() {
    let a = build_prompt("profile1 text", "profile2 text").unwrap();
    let b = build_prompt("profile1 text", "profile2 text").unwrap();
    assert_eq!(a, b);
    assert!(a.contains("profile1 text"));
    assert!(a.contains("profile2 text"));
}

#[test]
fn test_null_score_is_out_of_range_not_missing() {
    for field in ScoreField::ALL {
        let mut value: serde_json::Value =
            serde_json::from_str(&scores_json(50, 50, 50, 50, "ok")).unwrap();
        value[field.key()] = serde_json::Value::Null;

        match parse_compatibility(&value.to_string()) {
            Err(CompatibilityError::OutOfRangeScore { field: got, .. }) => assert_eq!(got, field),
            other => panic!("{} = null: expected OutOfRangeScore, got {:?}", field, other),
        }
    }
}
