//! HTML generation from grouped icon variants
//!
//! Group keys and resolved paths are emitted verbatim, without HTML
//! escaping. The document is meant for browsing a local icon tree;
//! untrusted input is not a supported source, and this is a known
//! limitation rather than an oversight.

use crate::scanner::{IconGroups, IconVariant};
use crate::stylesheet::Stylesheet;

use super::HtmlConfig;

/// Build the gallery document incrementally
pub struct HtmlBuilder {
    config: HtmlConfig,
    styles: Vec<String>,
    groups: Vec<String>,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    pub fn new(config: HtmlConfig) -> Self {
        Self {
            config,
            styles: vec![],
            groups: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add CSS custom properties from a stylesheet
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let mut css = String::from("            :root {\n");
        for (token, value) in &stylesheet.colors {
            css.push_str(&format!("                --{}: {};\n", token, value));
        }
        css.push_str("            }");
        self.styles.push(css);

        // Apply font-family to group labels if defined
        if stylesheet.colors.contains_key("font-family") {
            let prefix = self.prefix();
            self.styles.push(format!(
                "            .{}group span {{ font-family: var(--font-family); }}",
                prefix
            ));
        }
    }

    /// Add the page-level color rules
    pub fn add_page_rules(&mut self, stylesheet: &Stylesheet) {
        self.styles.push(format!(
            "            body {{\n                background: {};\n                color: {};\n            }}",
            stylesheet.resolve_or_default("page-background"),
            stylesheet.resolve_or_default("page-foreground"),
        ));
    }

    /// Add the hover-reveal rules for group labels
    ///
    /// The label is hidden by default and shown while the group container
    /// is hovered, absolutely positioned below the icon row.
    pub fn add_hover_rules(&mut self, stylesheet: &Stylesheet) {
        let p = self.prefix();
        let background = stylesheet.resolve_or_default("label-background");
        let foreground = stylesheet.resolve_or_default("label-foreground");

        self.styles.push(format!(
            r#"            .{p}group {{
                display: inline;
                position: relative;
            }}

            .{p}group span {{
                display: none;
                position: absolute;
                top: 2em;
                z-index: 100;
                background: {background};
                color: {foreground};
            }}

            .{p}group:hover span {{
                display: inline;
            }}"#
        ));
    }

    /// Add one icon group: a label span followed by one image per variant
    pub fn add_group(&mut self, name: &str, variants: &[IconVariant]) {
        let prefix = self.prefix();
        let images = variants
            .iter()
            .map(|v| {
                format!(
                    r#"<img src="{}" width="{}" height="{}">"#,
                    v.resolved.display(),
                    v.size,
                    v.size
                )
            })
            .collect::<Vec<_>>()
            .join(self.newline());

        self.groups.push(format!(
            r#"<div class="{}group"><span>{}</span>{}</div>"#,
            prefix, name, images
        ));
    }

    /// Build the final HTML string
    pub fn build(self) -> String {
        let nl = self.newline();

        let mut html = String::new();

        html.push_str("<html>");
        html.push_str(nl);
        html.push_str("    <head>");
        html.push_str(nl);
        if let Some(title) = &self.config.page_title {
            html.push_str(&format!("        <title>{}</title>", title));
            html.push_str(nl);
        }
        html.push_str("        <style>");
        html.push_str(nl);
        for style in &self.styles {
            html.push_str(style);
            html.push_str(nl);
        }
        html.push_str("        </style>");
        html.push_str(nl);
        html.push_str("    </head>");
        html.push_str(nl);
        html.push_str("    <body>");
        html.push_str(nl);
        html.push_str(nl);

        for group in &self.groups {
            html.push_str(group);
            html.push_str(nl);
        }

        html.push_str(nl);
        html.push_str("    </body>");
        html.push_str(nl);
        html.push_str("</html>");
        html.push_str(nl);

        html
    }
}

/// Render grouped variants to an HTML string (with default stylesheet)
pub fn render_html(groups: &IconGroups, config: &HtmlConfig) -> String {
    render_html_with_stylesheet(groups, config, &Stylesheet::default())
}

/// Render grouped variants to an HTML string with a custom stylesheet
pub fn render_html_with_stylesheet(
    groups: &IconGroups,
    config: &HtmlConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = HtmlBuilder::new(config.clone());

    builder.add_stylesheet(stylesheet);
    builder.add_page_rules(stylesheet);
    builder.add_hover_rules(stylesheet);

    for (name, variants) in groups {
        builder.add_group(name, variants);
    }

    builder.build()
}
