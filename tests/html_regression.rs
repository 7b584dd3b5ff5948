//! Regression tests for the emitted document structure
//!
//! The :root custom-property block iterates a HashMap, so its line order
//! is non-deterministic. Structural comparisons strip the style block and
//! blank lines instead of comparing byte-for-byte.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use icon_gallery::resolver::Indirection;
use icon_gallery::scanner::{IconGroups, IconVariant};
use icon_gallery::{render_html, HtmlConfig};

fn variant(name: &str, resolved: &str, size: u32) -> IconVariant {
    IconVariant {
        name: name.to_string(),
        source: PathBuf::from(resolved),
        resolved: PathBuf::from(resolved),
        size,
        indirection: Indirection::None,
    }
}

/// Normalize a document for comparison: drop the style block, trim
/// indentation, and skip blank lines.
fn normalize_html_for_comparison(html: &str) -> String {
    let mut result = String::new();
    let mut in_style = false;

    for line in html.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("<style>") {
            in_style = true;
            continue;
        }
        if trimmed.starts_with("</style>") {
            in_style = false;
            continue;
        }
        if in_style || trimmed.is_empty() {
            continue;
        }

        result.push_str(trimmed);
        result.push('\n');
    }

    result
}

#[test]
fn test_document_structure_single_group() {
    let mut groups = IconGroups::new();
    groups.insert("x.svg".to_string(), vec![variant("x.svg", "a/32/x.svg", 32)]);

    let html = render_html(&groups, &HtmlConfig::default());

    let expected = r#"<html>
<head>
</head>
<body>
<div class="group"><span>x.svg</span><img src="a/32/x.svg" width="32" height="32"></div>
</body>
</html>
"#;
    assert_eq!(normalize_html_for_comparison(&html), expected);
}

#[test]
fn test_document_structure_multiple_variants() {
    let mut groups = IconGroups::new();
    groups.insert(
        "edit.svg".to_string(),
        vec![
            variant("edit.svg", "a/16/edit.svg", 16),
            variant("edit.svg", "a/48/edit.svg", 48),
        ],
    );

    let html = render_html(&groups, &HtmlConfig::default());

    let expected = r#"<html>
<head>
</head>
<body>
<div class="group"><span>edit.svg</span><img src="a/16/edit.svg" width="16" height="16">
<img src="a/48/edit.svg" width="48" height="48"></div>
</body>
</html>
"#;
    assert_eq!(normalize_html_for_comparison(&html), expected);
}

#[test]
fn test_document_structure_multiple_groups_in_insertion_order() {
    let mut groups = IconGroups::new();
    groups.insert(
        "zebra.svg".to_string(),
        vec![variant("zebra.svg", "zebra.svg", 32)],
    );
    groups.insert(
        "apple.svg".to_string(),
        vec![variant("apple.svg", "apple.svg", 32)],
    );

    let html = render_html(&groups, &HtmlConfig::default());

    let expected = r#"<html>
<head>
</head>
<body>
<div class="group"><span>zebra.svg</span><img src="zebra.svg" width="32" height="32"></div>
<div class="group"><span>apple.svg</span><img src="apple.svg" width="32" height="32"></div>
</body>
</html>
"#;
    assert_eq!(normalize_html_for_comparison(&html), expected);
}

#[test]
fn test_document_structure_empty() {
    let html = render_html(&IconGroups::new(), &HtmlConfig::default());

    let expected = r#"<html>
<head>
</head>
<body>
</body>
</html>
"#;
    assert_eq!(normalize_html_for_comparison(&html), expected);
}

#[test]
fn test_style_block_present_before_normalization() {
    let html = render_html(&IconGroups::new(), &HtmlConfig::default());

    assert!(html.contains("<style>"));
    assert!(html.contains("</style>"));
    assert!(html.contains(":root {"));
    assert!(html.contains(":hover"));
}
