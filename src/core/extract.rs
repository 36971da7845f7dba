// soapdump - core/extract.rs
//
// Tag text and attribute value extraction from loosely structured XML-like
// fragments. Pattern based: works for flat, non-nested, single-occurrence
// tags only. Callers go through `FieldExtractor` so a structural parser can
// replace this without touching them.
//
// Absence is always an empty string; nothing here returns an error.

use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;

/// Narrow capability for pulling values out of a payload fragment.
pub trait FieldExtractor {
    /// Text content of the first `<tag ...>text</tag>` in `fragment`, or "".
    fn tag_text(&self, fragment: &str, tag: &str) -> String;

    /// Value of the first `attribute="value"` anywhere in `fragment`, or "".
    fn attribute_value(&self, fragment: &str, attribute: &str) -> String;
}

/// Regex-backed extractor that compiles each tag/attribute pattern once.
#[derive(Debug, Default)]
pub struct PatternExtractor {
    tags: RefCell<HashMap<String, Option<Regex>>>,
    attributes: RefCell<HashMap<String, Option<Regex>>>,
}

impl PatternExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldExtractor for PatternExtractor {
    fn tag_text(&self, fragment: &str, tag: &str) -> String {
        let mut cache = self.tags.borrow_mut();
        let re = cache
            .entry(tag.to_string())
            .or_insert_with(|| compile(&tag_pattern(tag)));
        re.as_ref()
            .map(|re| first_capture(re, fragment))
            .unwrap_or_default()
    }

    fn attribute_value(&self, fragment: &str, attribute: &str) -> String {
        let mut cache = self.attributes.borrow_mut();
        let re = cache
            .entry(attribute.to_string())
            .or_insert_with(|| compile(&attribute_pattern(attribute)));
        re.as_ref()
            .map(|re| first_capture(re, fragment))
            .unwrap_or_default()
    }
}

/// Return the text content of the first `tag` element in `fragment`.
///
/// The opening tag may carry attributes; the content may not contain `<`.
/// The tag name, namespace prefix included, is matched literally.
pub fn extract_tag_value(fragment: &str, tag: &str) -> String {
    compile(&tag_pattern(tag))
        .map(|re| first_capture(&re, fragment))
        .unwrap_or_default()
}

/// Return the quoted value of the first `attribute="..."` in `fragment`.
///
/// Not scoped to any element: the first occurrence anywhere wins.
pub fn extract_attribute_value(fragment: &str, attribute: &str) -> String {
    compile(&attribute_pattern(attribute))
        .map(|re| first_capture(&re, fragment))
        .unwrap_or_default()
}

fn tag_pattern(tag: &str) -> String {
    let name = regex::escape(tag);
    format!(r"<{name}(?:\s[^>]*)?>([^<]*)</{name}>")
}

fn attribute_pattern(attribute: &str) -> String {
    format!(r#"{}="([^"]*)""#, regex::escape(attribute))
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            // Escaped names always compile; a size-limit error is the only route here.
            tracing::debug!(error = %e, "Extraction pattern rejected; treating field as absent");
            None
        }
    }
}

fn first_capture(re: &Regex, fragment: &str) -> String {
    re.captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
