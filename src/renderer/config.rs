//! Configuration for HTML rendering

/// Configuration options for the emitted document
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Title for the document head; no title element when `None`
    pub page_title: Option<String>,

    /// Whether to format output with newlines between sections
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "ig-" for "ig-group")
    pub class_prefix: Option<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            page_title: None,
            pretty_print: true,
            class_prefix: None,
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page title
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
