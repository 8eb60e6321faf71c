//! JSON configuration in, JSON styles out.
#![cfg(feature = "serde")]

use capsize_responsive::{ResponsiveOptions, responsive_capsize};

#[test]
fn json_round_trip_through_broadcaster() {
    let options: ResponsiveOptions = serde_json::from_str(
        r#"{
            "capHeight": [48, 96],
            "lineGap": [24],
            "fontMetrics": {
                "capHeight": 1456,
                "ascent": 1900,
                "descent": -500,
                "lineGap": 0,
                "unitsPerEm": 2048
            }
        }"#,
    )
    .unwrap();

    let styles = responsive_capsize(&options).unwrap();
    assert_eq!(
        serde_json::to_value(&styles).unwrap(),
        serde_json::json!({
            "fontSize": ["67.5165px", "135.033px"],
            "lineHeight": ["72px", "120px"],
            "::before": {
                "content": "''",
                "marginBottom": ["-0.1641em", "-0.0752em"],
                "display": "table"
            },
            "::after": {
                "content": "''",
                "marginTop": ["-0.1914em", "-0.1025em"],
                "display": "table"
            }
        })
    );
}

#[test]
fn empty_leading_serializes_normal() {
    let options: ResponsiveOptions = serde_json::from_str(
        r#"{
            "fontSize": [16],
            "leading": [],
            "fontMetrics": {
                "capHeight": 1456,
                "ascent": 1900,
                "descent": -500,
                "lineGap": 0,
                "unitsPerEm": 2048
            }
        }"#,
    )
    .unwrap();

    let styles = responsive_capsize(&options).unwrap();
    let json = serde_json::to_value(&styles).unwrap();
    assert_eq!(json["lineHeight"], serde_json::json!(["normal"]));
    assert_eq!(json["fontSize"], serde_json::json!(["16px"]));
}
