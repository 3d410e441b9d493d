// tests/pipeline_test.rs — Integration test: extraction → assembly → theming

use frontfusion::codegen::assemble::{assemble, AUXILIARY_FILES, COMPONENT_ENTRY, PLAIN_ENTRY};
use frontfusion::codegen::extract::extract;
use frontfusion::codegen::Framework;
use frontfusion::theme::{apply_theme, CustomPalette};

const RAW: &str = "Sure, here is a login form.\n\
```html\n\
<div class=\"bg-gray-900 text-gray-100 border-gray-700\">\n\
  <button class=\"bg-violet-600 hover:bg-gray-800\">Sign in</button>\n\
</div>\n\
```\n\
Key improvements:\n\
* semantic markup\n";

#[test]
fn test_plain_assembly_wraps_extraction() {
    let primary = extract(RAW);
    let files = assemble(&primary, Framework::Tailwind);

    assert_eq!(files.len(), 1);
    assert_eq!(
        files.get(PLAIN_ENTRY).and_then(|v| v.as_str()),
        Some(primary.as_str())
    );
}

#[test]
fn test_component_assembly_primary_equals_extraction() {
    let primary = extract(RAW);
    let files = assemble(&primary, Framework::Both);

    assert_eq!(files.len(), 1 + AUXILIARY_FILES.len());
    assert_eq!(
        files.get(COMPONENT_ENTRY).and_then(|v| v.as_str()),
        Some(primary.as_str())
    );
}

#[test]
fn test_theme_then_assemble_keeps_auxiliary_constant() {
    let primary = extract(RAW);
    let themed = apply_theme(&primary, "light", None);
    assert_ne!(primary, themed);

    let plain = assemble(&primary, Framework::React);
    let light = assemble(&themed, Framework::React);

    // Only the primary differs between themed and unthemed assemblies
    for (path, _) in AUXILIARY_FILES {
        assert_eq!(plain.get(*path), light.get(*path));
    }
    assert_ne!(plain.get(COMPONENT_ENTRY), light.get(COMPONENT_ENTRY));
}

#[test]
fn test_full_pipeline_light_theme_idempotent() {
    let primary = extract(RAW);
    let once = apply_theme(&primary, "light", None);
    let twice = apply_theme(&once, "light", None);
    assert_eq!(once, twice);
    assert!(once.contains("bg-white"));
    assert!(once.contains("hover:bg-gray-100"));
}

#[test]
fn test_full_pipeline_custom_never_fails_on_odd_input() {
    let palette = CustomPalette {
        background: "#1e293b".into(),
        text: "#f1f5f9".into(),
        border: "#475569".into(),
        primary: "#4f46e5".into(),
        secondary: "#6d28d9".into(),
        accent: "#0891b2".into(),
    };

    // Unfenced, partially malformed output still flows through
    let raw = "# The code\n<div class=\"bg-gray-900\"><unclosed\n* done";
    let primary = extract(raw);
    let themed = apply_theme(&primary, "custom", Some(&palette));
    assert!(themed.contains("bg-slate-800"));
    assert!(themed.contains("<unclosed"));
}
