//! Out-of-flow previews are boxed in an `<iframe>` so fixed, absolute and
//! sticky elements cannot cover the rest of the page.

use crate::options::PreviewOptions;
use crate::render::escape_html;
use crate::style::owned_css::{OwnedRule, OwnedStylesheet};

const FRAME_BORDER: &str = "border:1px dotted #acad9e;";
const FRAME_BACKGROUND: &str = "background:#f6f4ee";

/// Selectors of every out-of-flow rule, deduplicated, in source order.
#[derive(Debug, Default, Clone)]
pub struct FrameRegistry {
    selectors: Vec<String>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the selectors of all rules whose `position` is fixed, absolute or sticky.
    pub fn from_stylesheet(sheet: &OwnedStylesheet) -> Self {
        let mut registry = FrameRegistry::new();
        for rule in sheet.rules.iter().filter(|r| r.is_out_of_flow()) {
            for selector in &rule.selectors {
                registry.register(selector);
            }
        }
        registry
    }

    pub fn register(&mut self, selector: &str) {
        if !self.selectors.iter().any(|s| s == selector) {
            self.selectors.push(selector.to_string());
        }
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// True if `text` contains a registered selector. Plain substring
    /// containment: `.nav` also matches `.navigation-bar .item`.
    pub fn matches(&self, text: &str) -> bool {
        self.selectors.iter().any(|s| text.contains(s.as_str()))
    }
}

/// Decide whether one selector of `rule` is previewed inside a frame: either
/// the rule itself is out of flow, or the selector's flattened text (see
/// [`flatten_selector`](crate::selector::normalize::flatten_selector))
/// contains a registered out-of-flow selector.
pub fn needs_isolation(rule: &OwnedRule, flattened: &str, registry: &FrameRegistry) -> bool {
    rule.is_out_of_flow() || registry.matches(flattened)
}

/// Embed `fragment` as the `srcdoc` of a fixed-size frame that re-links the stylesheet.
pub fn wrap_in_frame(fragment: &str, options: &PreviewOptions) -> String {
    let frame_head = format!(
        "<html><head><link href=\"{}\" rel=\"stylesheet\" type=\"text/css\"/></head><body style=\"{}\">",
        escape_html(&options.stylesheet_href),
        FRAME_BACKGROUND
    );
    format!(
        "<iframe style=\"{}\" width=\"{}\" height=\"{}\" srcdoc=\"{}{}\"></iframe><br/>\n",
        FRAME_BORDER,
        options.frame_width,
        options.frame_height,
        escape_html(&frame_head),
        escape_html(fragment)
    )
}
