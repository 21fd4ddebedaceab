//! Turns a selector chain into nested placeholder elements.
//!
//! The leftmost segment becomes the outermost element. Each segment is opened,
//! the rest of the chain is rendered inside it, then it is closed, so the
//! closing tags come out in reverse order. The innermost element holds the
//! rule's selector text as a visible label.

use crate::render::escape_html;
use crate::selector::extract::{extract_tag_attrs, TagParts};

/// 300×150 yellow rectangle with its size written in the middle.
pub const IMAGE_PLACEHOLDER: &str = "data:image/svg+xml;charset=UTF-8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='300' height='150' viewBox='0 0 300 150'%3E%3Crect fill='yellow' width='300' height='150'/%3E%3Ctext fill='rgba(0,0,0,0.5)' x='50%25' y='50%25' text-anchor='middle'%3E300×150%3C/text%3E%3C/svg%3E";

const ANCHOR_MARKER: &str = "\u{2693}\u{fe0f}";

const TABLE_CELL_OPEN: &str = "<table><thead><tr><th>&#x1F536;&#x1F537;[th]&#x1F537;&#x1F536;</th></tr></thead><tbody><tr>";
const TABLE_CELL_LABEL: &str = "&#x1F539;[td]&#x1F539;<br/>";
const TABLE_CELL_CLOSE: &str = "</td></tr></tbody></table>";

/// How a single chain segment is materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// `.card`, `#hero`: a `div` carrying the class/id.
    Container(TagParts),
    /// `a`, `a.button`: a link with a visible marker before its end tag.
    Anchor(TagParts),
    /// `img`, `img.logo`: the placeholder image, never closed.
    Image(TagParts),
    /// `td`: a lone cell wrapped in a one-cell table.
    TableCell(TagParts),
    /// Anything else, rendered as its own tag.
    Element(TagParts),
}

impl Placeholder {
    pub fn classify(segment: &str) -> Self {
        let parts = match extract_tag_attrs(segment) {
            Ok(parts) => parts,
            Err(e) => {
                log::warn!("{}", e);
                TagParts::default()
            }
        };

        if segment.starts_with(['.', '#']) {
            Placeholder::Container(parts)
        } else if is_tag(segment, "a") {
            Placeholder::Anchor(parts)
        } else if is_tag(segment, "img") {
            Placeholder::Image(parts)
        } else if parts.tag.eq_ignore_ascii_case("td") {
            Placeholder::TableCell(parts)
        } else {
            Placeholder::Element(parts)
        }
    }

    pub fn render_open(&self, out: &mut String) {
        match self {
            Placeholder::Container(parts) => out.push_str(&open_tag("div", &parts.attrs())),
            Placeholder::Anchor(parts) => {
                out.push_str(&open_tag("a", &join_attrs(&parts.attrs(), "href=\"#\"")));
            }
            Placeholder::Image(parts) => {
                let src = format!("src=\"{}\" alt=\"[image]\"", IMAGE_PLACEHOLDER);
                out.push_str(&open_tag("img", &join_attrs(&parts.attrs(), &src)));
            }
            Placeholder::TableCell(parts) => {
                out.push_str(TABLE_CELL_OPEN);
                out.push_str(&open_tag("td", &parts.attrs()));
                out.push_str(TABLE_CELL_LABEL);
            }
            Placeholder::Element(parts) => {
                out.push_str(&open_tag(element_name(parts), &parts.attrs()));
            }
        }
    }

    pub fn render_close(&self, segment: &str, out: &mut String) {
        match self {
            Placeholder::Container(_) => out.push_str("</div>"),
            Placeholder::Anchor(_) => {
                out.push_str(ANCHOR_MARKER);
                out.push(' ');
                out.push_str(&escape_html(segment));
                out.push_str("</a>");
            }
            Placeholder::Image(_) => {}
            Placeholder::TableCell(_) => out.push_str(TABLE_CELL_CLOSE),
            Placeholder::Element(parts) => {
                out.push_str("</");
                out.push_str(element_name(parts));
                out.push('>');
            }
        }
    }
}

/// Render `segments` as nested placeholders around `label`.
pub fn render_chain(segments: &[&str], label: &str, out: &mut String) {
    match segments.split_first() {
        Some((head, tail)) => {
            let placeholder = Placeholder::classify(head);
            placeholder.render_open(out);
            render_chain(tail, label, out);
            placeholder.render_close(head, out);
        }
        None => out.push_str(&escape_html(label)),
    }
}

/// `a`, `a.x` or `a#x` for tag `a`, but not `abbr`.
fn is_tag(segment: &str, tag: &str) -> bool {
    match segment.strip_prefix(tag) {
        Some(rest) => rest.is_empty() || rest.starts_with(['.', '#']),
        None => false,
    }
}

/// A segment whose extraction failed has no tag; it still needs an element.
fn element_name(parts: &TagParts) -> &str {
    if parts.tag.is_empty() {
        "div"
    } else {
        &parts.tag
    }
}

fn join_attrs(first: &str, second: &str) -> String {
    if first.is_empty() {
        second.to_string()
    } else {
        format!("{} {}", first, second)
    }
}

fn open_tag(name: &str, attrs: &str) -> String {
    if attrs.is_empty() {
        format!("<{}>", name)
    } else {
        format!("<{} {}>", name, attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(chain: &str, label: &str) -> String {
        let segments: Vec<&str> = chain.split_whitespace().collect();
        let mut out = String::new();
        render_chain(&segments, label, &mut out);
        out
    }

    #[test]
    fn test_nesting_is_lifo() {
        assert_eq!(
            render("div.outer span.inner", "div.outer span.inner"),
            r#"<div class="outer"><span class="inner">div.outer span.inner</span></div>"#
        );
    }

    #[test]
    fn test_label_is_the_full_selector_text() {
        assert_eq!(
            render("ul li", "ul > li, ol > li"),
            "<ul><li>ul &gt; li, ol &gt; li</li></ul>"
        );
    }

    #[test]
    fn test_container_for_class_and_id_segments() {
        assert_eq!(
            render(".card.active #hero", "x"),
            r#"<div class="card active"><div id="hero">x</div></div>"#
        );
    }

    #[test]
    fn test_anchor_gets_href_and_marker() {
        assert_eq!(
            render("a.button", "a.button"),
            "<a class=\"button\" href=\"#\">a.button\u{2693}\u{fe0f} a.button</a>"
        );
        assert_eq!(render("a", "a"), "<a href=\"#\">a\u{2693}\u{fe0f} a</a>");
    }

    #[test]
    fn test_abbr_is_not_an_anchor() {
        assert_eq!(render("abbr", "abbr"), "<abbr>abbr</abbr>");
    }

    #[test]
    fn test_image_is_never_closed() {
        let out = render("figure img.logo", "figure img.logo");
        assert_eq!(
            out,
            format!(
                "<figure><img class=\"logo\" src=\"{}\" alt=\"[image]\">figure img.logo</figure>",
                IMAGE_PLACEHOLDER
            )
        );
    }

    #[test]
    fn test_td_is_wrapped_in_a_table() {
        assert_eq!(
            render("td.num", "td.num"),
            concat!(
                "<table><thead><tr><th>&#x1F536;&#x1F537;[th]&#x1F537;&#x1F536;</th></tr></thead>",
                "<tbody><tr><td class=\"num\">&#x1F539;[td]&#x1F539;<br/>td.num",
                "</td></tr></tbody></table>"
            )
        );
        assert!(matches!(Placeholder::classify("TD"), Placeholder::TableCell(_)));
    }

    #[test]
    fn test_bad_segment_degrades_to_bare_div() {
        assert_eq!(
            render("section div. p", "x"),
            "<section><div><p>x</p></div></section>"
        );
    }
}
