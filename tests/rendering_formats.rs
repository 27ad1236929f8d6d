//! Renderer behavior across artifact kinds

use docsync::docsync::artifacts::ArtifactKind;
use docsync::docsync::rendering::RendererRegistry;
use rstest::rstest;

#[rstest]
#[case::records(ArtifactKind::Records, "{\"a\": 1}", "{\n  \"a\": 1\n}")]
#[case::raw(ArtifactKind::Raw, "key: value\n", "key: value\n")]
#[case::table(ArtifactKind::Table, "a,b\n1,2\n", "| a | b |\n| - | - |\n| 1 | 2 |")]
fn renders_expected_text(#[case] kind: ArtifactKind, #[case] source: &str, #[case] expected: &str) {
    let registry = RendererRegistry::with_builtins();
    assert_eq!(registry.render(kind, source).unwrap(), expected);
}

#[rstest]
#[case(ArtifactKind::Records)]
#[case(ArtifactKind::Raw)]
#[case(ArtifactKind::Table)]
fn registry_resolves_every_kind(#[case] kind: ArtifactKind) {
    let registry = RendererRegistry::with_builtins();
    let renderer = registry.get(kind.renderer_name()).unwrap();
    assert_eq!(renderer.name(), kind.renderer_name());
    assert!(!renderer.description().is_empty());
}

#[rstest]
#[case::object("{\"b\": 2, \"a\": [1, {\"c\": null}]}")]
#[case::array("[true, false, \"x\"]")]
#[case::nested("{\"outer\": {\"inner\": {\"deep\": 3}}}")]
fn records_round_trip_deeply_equal(#[case] source: &str) {
    let registry = RendererRegistry::with_builtins();
    let rendered = registry.render(ArtifactKind::Records, source).unwrap();

    let original: serde_json::Value = serde_json::from_str(source).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(original, reparsed);
}

#[test]
fn malformed_records_source_is_an_error() {
    let registry = RendererRegistry::with_builtins();
    assert!(registry.render(ArtifactKind::Records, "{nope").is_err());
}
