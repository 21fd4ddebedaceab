// src/style/owned_css.rs (owned copies of the parser's rules, free of the input lifetime)
use std::fmt;

/// `position` values that take an element out of normal flow.
pub const OUT_OF_FLOW_POSITIONS: &[&str] = &["fixed", "absolute", "sticky"];

/// A fully-owned CSS stylesheet: style rules only, in source order.
#[derive(Debug, Default, Clone)]
pub struct OwnedStylesheet {
    pub rules: Vec<OwnedRule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRule {
    /// e.g. "div", ".card > a", "#header"
    pub selectors: Vec<String>,
    /// Each declaration is property => value, e.g. "position" => "absolute".
    pub declarations: Vec<OwnedDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedDeclaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl OwnedDeclaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        OwnedDeclaration {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

impl OwnedRule {
    pub fn new<S: Into<String>>(
        selectors: impl IntoIterator<Item = S>,
        declarations: Vec<OwnedDeclaration>,
    ) -> Self {
        OwnedRule {
            selectors: selectors.into_iter().map(Into::into).collect(),
            declarations,
        }
    }

    /// The whole selector list as written, e.g. `h1, .title`.
    pub fn selector_text(&self) -> String {
        self.selectors.join(", ")
    }

    /// Effective value of `property`: the last `!important` declaration if any,
    /// otherwise the last normal one.
    pub fn property(&self, property: &str) -> Option<&str> {
        let mut normal = None;
        let mut important = None;
        for decl in &self.declarations {
            if !decl.property.eq_ignore_ascii_case(property) {
                continue;
            }
            if decl.important {
                important = Some(decl.value.as_str());
            } else {
                normal = Some(decl.value.as_str());
            }
        }
        important.or(normal)
    }

    /// True when the rule sets `position` to fixed, absolute or sticky.
    pub fn is_out_of_flow(&self) -> bool {
        self.property("position").is_some_and(|value| {
            let value = value.trim();
            OUT_OF_FLOW_POSITIONS
                .iter()
                .any(|p| value.eq_ignore_ascii_case(p))
        })
    }
}

impl fmt::Display for OwnedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selectors: {:?}", self.selectors)?;
        for decl in &self.declarations {
            if decl.important {
                writeln!(f, "  {}: {} !important", decl.property, decl.value)?;
            } else {
                writeln!(f, "  {}: {}", decl.property, decl.value)?;
            }
        }
        Ok(())
    }
}
