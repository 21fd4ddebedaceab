use crate::error::{Error, Result};

/// Tag name plus class/id attributes peeled off one chain segment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagParts {
    /// Empty for segments like `.card` or `#hero`.
    pub tag: String,
    pub classes: Vec<String>,
    pub ids: Vec<String>,
}

impl TagParts {
    /// Attribute fragment, e.g. `class="card active"`, `class="big" id="main"` or empty.
    pub fn attrs(&self) -> String {
        let mut parts = Vec::new();
        if !self.classes.is_empty() {
            parts.push(format!("class=\"{}\"", self.classes.join(" ")));
        }
        if !self.ids.is_empty() {
            parts.push(format!("id=\"{}\"", self.ids.join(" ")));
        }
        parts.join(" ")
    }
}

#[derive(Clone, Copy)]
enum Part {
    Tag,
    Class,
    Id,
}

/// Split a segment such as `div#main.big.wide` into its tag, classes and ids.
///
/// Every `.name` and `#name` fragment is kept; the text before the first
/// prefix is the tag. Empty names and names that would break out of a quoted
/// attribute value are rejected.
pub fn extract_tag_attrs(segment: &str) -> Result<TagParts> {
    let mut parts = TagParts::default();
    let mut current = Part::Tag;
    let mut buffer = String::new();

    for ch in segment.chars() {
        match ch {
            '.' | '#' => {
                push_part(&mut parts, current, &mut buffer, segment)?;
                current = if ch == '.' { Part::Class } else { Part::Id };
            }
            '"' | '<' | '>' | '&' => {
                return Err(Error::invalid_segment(
                    segment,
                    format!("'{}' cannot appear in a tag or attribute", ch),
                ));
            }
            _ => buffer.push(ch),
        }
    }
    push_part(&mut parts, current, &mut buffer, segment)?;

    Ok(parts)
}

fn push_part(parts: &mut TagParts, part: Part, buffer: &mut String, segment: &str) -> Result<()> {
    let name = std::mem::take(buffer);
    match part {
        Part::Tag => parts.tag = name,
        Part::Class | Part::Id if name.is_empty() => {
            return Err(Error::invalid_segment(segment, "empty class or id name"));
        }
        Part::Class => parts.classes.push(name),
        Part::Id => parts.ids.push(name),
    }
    Ok(())
}
