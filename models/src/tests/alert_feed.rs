use crate::{Alert, AlertFeed};

/// **VALUE**: Decodes the upstream GeoJSON shape while ignoring every unmodelled field.
///
/// **WHY THIS MATTERS**: Real responses carry dozens of fields per feature (geometry,
/// ids, severity, ...). Decoding must not depend on any of them.
///
/// **BUG THIS CATCHES**: Would catch `#[serde(deny_unknown_fields)]` creeping in, or a
/// newly modelled field being made mandatory.
#[test]
fn given_upstream_document_with_extra_fields_when_decoded_then_headlines_in_order() {
    // GIVEN: A trimmed-down but realistic alerts document
    let body = r#"{
        "@context": ["https://geojson.org/geojson-ld/geojson-context.jsonld"],
        "type": "FeatureCollection",
        "features": [
            {
                "id": "urn:oid:2.49.0.1.840.0.1",
                "type": "Feature",
                "geometry": null,
                "properties": {
                    "event": "Flood Warning",
                    "severity": "Severe",
                    "headline": "Flood Warning issued for Travis County"
                }
            },
            {
                "properties": { "headline": "Heat Advisory until 8 PM" }
            }
        ],
        "title": "Current watches, warnings, and advisories"
    }"#;

    // WHEN: Decoding
    let feed: AlertFeed = serde_json::from_str(body).expect("valid feed");

    // THEN: Two alerts, headlines preserved in order
    assert_eq!(feed.len(), 2);
    let headlines: Vec<&str> = feed.headlines().collect();
    assert_eq!(
        headlines,
        vec!["Flood Warning issued for Travis County", "Heat Advisory until 8 PM"]
    );
}

#[test]
fn given_empty_features_when_decoded_then_feed_is_empty() {
    let feed: AlertFeed = serde_json::from_str(r#"{"features": []}"#).unwrap();
    assert!(feed.is_empty());
    assert_eq!(feed.headlines().count(), 0);
}

/// **VALUE**: A `null` or missing headline is rendered as an empty item, not a decode failure.
///
/// **BUG THIS CATCHES**: Would catch `headline` being changed to a required `String`,
/// which would turn a single odd alert into a failed fetch for the whole region.
#[test]
fn given_null_or_missing_headline_when_decoded_then_headline_is_empty() {
    // GIVEN: One null headline and one properties object with no headline
    let body = r#"{"features": [
        {"properties": {"headline": null}},
        {"properties": {"event": "Special Weather Statement"}}
    ]}"#;

    // WHEN: Decoding
    let feed: AlertFeed = serde_json::from_str(body).expect("should decode");

    // THEN: Both render as empty strings
    assert_eq!(feed.headlines().collect::<Vec<_>>(), vec!["", ""]);
}

#[test]
fn given_document_without_features_when_decoded_then_fails() {
    let result = serde_json::from_str::<AlertFeed>(r#"{"type": "FeatureCollection"}"#);
    assert!(result.is_err(), "features is required");
}

#[test]
fn given_feature_without_properties_when_decoded_then_fails() {
    let result = serde_json::from_str::<AlertFeed>(r#"{"features": [{"id": "x"}]}"#);
    assert!(result.is_err(), "properties is required on every feature");
}

#[test]
fn given_alerts_when_collected_then_feed_preserves_order() {
    let feed: AlertFeed = ["Flood Warning", "Heat Advisory"]
        .into_iter()
        .map(Alert::with_headline)
        .collect();

    assert_eq!(
        feed.headlines().collect::<Vec<_>>(),
        vec!["Flood Warning", "Heat Advisory"]
    );
}
