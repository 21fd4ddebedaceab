use crate::error::{Error, Result};
use crate::style::owned_css::{OwnedDeclaration, OwnedRule, OwnedStylesheet};
use lightningcss::error::{Error as LcssError, ParserError};
use lightningcss::printer::PrinterOptions;
use lightningcss::properties::Property;
use lightningcss::rules::{style::StyleRule, CssRule};
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LightningStyleSheet};
use lightningcss::traits::ToCss;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Read a stylesheet from disk and convert it to a fully-owned stylesheet.
pub fn load_stylesheet(path: impl AsRef<Path>) -> Result<OwnedStylesheet> {
    let path = path.as_ref();
    let css_text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_and_own_css(&css_text)
}

/// Parse a raw CSS string (LightningCSS) and convert it to a fully-owned stylesheet.
///
/// Invalid rules and declarations are skipped with a warning, so legacy hacks
/// such as `*zoom: 1` or a stray `}` do not stop the preview.
pub fn parse_and_own_css(css_text: &str) -> Result<OwnedStylesheet> {
    let warnings = Arc::new(RwLock::new(Vec::new()));
    let parser_opts = ParserOptions {
        error_recovery: true,
        warnings: Some(Arc::clone(&warnings)),
        ..ParserOptions::default()
    };

    let sheet = LightningStyleSheet::parse(css_text, parser_opts).map_err(to_parse_error)?;

    if let Ok(warnings) = warnings.read() {
        for warning in warnings.iter() {
            log::warn!("Ignoring invalid CSS: {}", warning);
        }
    }

    let mut owned_rules = Vec::new();

    for rule in &sheet.rules.0 {
        match rule {
            CssRule::Style(style_rule) => {
                owned_rules.push(convert_style_rule(style_rule));
            }
            CssRule::Media(media_rule) => {
                // Style rules inside @media are previewed like top-level ones.
                for inner_rule in &media_rule.rules.0 {
                    if let CssRule::Style(sr) = inner_rule {
                        owned_rules.push(convert_style_rule(sr));
                    }
                }
            }
            // @font-face, @keyframes, @import etc. have nothing to preview
            _ => {}
        }
    }

    Ok(OwnedStylesheet { rules: owned_rules })
}

/// LightningCSS errors borrow the input; keep only the message and location.
fn to_parse_error(e: LcssError<ParserError<'_>>) -> Error {
    let (line, column) = e
        .loc
        .as_ref()
        .map(|loc| (loc.line + 1, loc.column))
        .unwrap_or((0, 0));
    Error::parse(e.kind.to_string(), line, column)
}

/// Copy a single StyleRule's selectors + declarations into an OwnedRule.
fn convert_style_rule(style_rule: &StyleRule<'_>) -> OwnedRule {
    let mut selectors_vec = Vec::new();
    for selector in &style_rule.selectors.0 {
        match selector.to_css_string(PrinterOptions::default()) {
            Ok(sel_str) => selectors_vec.push(sel_str),
            Err(e) => log::warn!("Skipping unprintable selector: {}", e),
        }
    }

    let block = &style_rule.declarations;

    let mut decls_vec = Vec::new();
    for property in &block.declarations {
        if let Some(decl) = convert_declaration(property, false) {
            decls_vec.push(decl);
        }
    }
    for property in &block.important_declarations {
        if let Some(decl) = convert_declaration(property, true) {
            decls_vec.push(decl);
        }
    }

    OwnedRule {
        selectors: selectors_vec,
        declarations: decls_vec,
    }
}

fn convert_declaration(property: &Property<'_>, important: bool) -> Option<OwnedDeclaration> {
    let property_name = property.property_id().name().to_string();
    match property.value_to_css_string(PrinterOptions::default()) {
        Ok(value) => Some(OwnedDeclaration {
            property: property_name,
            value,
            important,
        }),
        Err(e) => {
            log::warn!("Skipping unprintable value for '{}': {}", property_name, e);
            None
        }
    }
}
