// Host-side checks on the wasm crate manifest.

const MANIFEST: &str = include_str!("../Cargo.toml");

fn web_sys_features() -> Vec<&'static str> {
    let start = MANIFEST
        .find("web-sys = {")
        .expect("web-sys dependency present");
    let block = &MANIFEST[start..];
    let end = block.find("] }").expect("web-sys feature list closed");
    block[..end]
        .lines()
        .filter_map(|l| l.trim().strip_prefix('"'))
        .filter_map(|l| l.split('"').next())
        .collect()
}

#[test]
fn visibility_feature_matches_web_sys_type_name() {
    let features = web_sys_features();
    assert!(features.contains(&"VisibilityState"), "{features:?}");
    assert!(!features.iter().any(|f| f.starts_with("Document") && f.ends_with("State")));
}

#[test]
fn dom_types_used_by_the_front_end_are_enabled() {
    let features = web_sys_features();
    for needed in [
        "Document",
        "HtmlCanvasElement",
        "HtmlImageElement",
        "CanvasRenderingContext2d",
        "CssStyleDeclaration",
        "Performance",
    ] {
        assert!(features.contains(&needed), "missing web-sys feature {needed}");
    }
}
