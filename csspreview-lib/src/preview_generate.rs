use crate::error::Result;
use crate::options::PreviewOptions;
use crate::render::isolation::{self, FrameRegistry};
use crate::render::{escape_html, placeholder};
use crate::selector::normalize::{self, SeenSelectors};
use crate::style::owned_css::OwnedStylesheet;
use crate::style::preview_css;
use std::path::Path;

pub mod css_preview {
    use super::*;

    /// Read, parse and render the stylesheet at `path`.
    pub fn generate_from_file(path: impl AsRef<Path>, options: &PreviewOptions) -> Result<String> {
        let sheet = preview_css::load_stylesheet(path)?;
        Ok(render_document(&sheet, options))
    }

    /// Parse `css_content` and render its preview document.
    pub fn generate(css_content: &str, options: &PreviewOptions) -> Result<String> {
        let sheet = preview_css::parse_and_own_css(css_content)?;
        Ok(render_document(&sheet, options))
    }

    /// Render one placeholder block per distinct selector chain in `sheet`.
    pub fn render_document(sheet: &OwnedStylesheet, options: &PreviewOptions) -> String {
        let mut document = String::new();
        document.push_str(&preamble(&options.stylesheet_href));

        let registry = if options.frames {
            FrameRegistry::from_stylesheet(sheet)
        } else {
            FrameRegistry::new()
        };
        log::debug!("Out-of-flow selectors: {:?}", registry.selectors());
        let mut seen = SeenSelectors::new();

        for rule in &sheet.rules {
            let label = rule.selector_text();
            log::debug!("CSS Rule: {}", label);
            log::trace!("{}", rule);

            for selector in &rule.selectors {
                let Some(chain) = normalize::normalize_selector(selector) else {
                    continue;
                };
                if !seen.insert(&chain) {
                    continue;
                }

                log::debug!("\t{}", chain);
                let segments = normalize::chain_segments(&chain);

                let flattened = normalize::flatten_selector(selector);
                if options.frames && isolation::needs_isolation(rule, &flattened, &registry) {
                    let mut fragment = String::new();
                    placeholder::render_chain(&segments, &label, &mut fragment);
                    document.push_str(&isolation::wrap_in_frame(&fragment, options));
                } else {
                    placeholder::render_chain(&segments, &label, &mut document);
                }
            }
        }

        document.push_str(DOCUMENT_TAIL);
        document
    }

    fn preamble(stylesheet_href: &str) -> String {
        let href = escape_html(stylesheet_href);
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>CSS preview: {href}</title>
    <link href="{href}" rel="stylesheet" type="text/css" />
</head>
<body>

"#
        )
    }

    const DOCUMENT_TAIL: &str = "\n    </body>\n    </html>\n";
}
