//! Tests for media field probing in generate responses.

use atelier_core::MediaKind;
use atelier_models::{FieldProbe, GenerationPayload, probes_for};
use serde_json::json;

fn find(body: serde_json::Value, kind: MediaKind) -> Option<String> {
    GenerationPayload(body)
        .probe(probes_for(kind))
        .map(str::to_string)
}

#[test]
fn test_response_field_wins_over_aliases() {
    let body = json!({ "response": "AAAA", "image": "BBBB", "images": ["CCCC"] });
    assert_eq!(find(body, MediaKind::Image).as_deref(), Some("AAAA"));
}

#[test]
fn test_empty_field_falls_through_to_next_alias() {
    let body = json!({ "response": "", "images": ["CCCC"] });
    assert_eq!(find(body, MediaKind::Image).as_deref(), Some("CCCC"));
}

#[test]
fn test_audio_aliases_in_order() {
    assert_eq!(
        find(json!({ "audio": "A", "wav": "W" }), MediaKind::Audio).as_deref(),
        Some("A")
    );
    assert_eq!(
        find(json!({ "wav": "W" }), MediaKind::Audio).as_deref(),
        Some("W")
    );
}

#[test]
fn test_image_alias_not_used_for_audio() {
    assert_eq!(find(json!({ "images": ["CCCC"] }), MediaKind::Audio), None);
    assert_eq!(find(json!({ "wav": "W" }), MediaKind::Image), None);
}

#[test]
fn test_non_string_fields_ignored() {
    let body = json!({ "response": 42, "image": null, "images": [] });
    assert_eq!(find(body, MediaKind::Image), None);
}

#[test]
fn test_probe_display() {
    assert_eq!(FieldProbe::FirstElement("images").to_string(), "images[0]");
    assert_eq!(FieldProbe::Field("wav").to_string(), "wav");
}
