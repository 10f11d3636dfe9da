#![forbid(unsafe_code)]

//! URL detection in message text.
//!
//! When linkification is enabled the message view records the byte spans of
//! web URLs so the renderer can style them as links. Detection requires the
//! `linkify` feature; without it no spans are produced.

/// A byte range into the message text covering one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkSpan {
    pub start: usize,
    pub end: usize,
}

impl LinkSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slice the span out of its source text.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub const fn contains(&self, byte: usize) -> bool {
        byte >= self.start && byte < self.end
    }
}

#[cfg(feature = "linkify")]
pub(crate) fn find_links(text: &str) -> Vec<LinkSpan> {
    use std::sync::OnceLock;

    use regex::Regex;

    static URL: OnceLock<Regex> = OnceLock::new();
    let re = URL.get_or_init(|| {
        Regex::new(r#"https?://[^\s<>"')\]]+"#).expect("url pattern is valid")
    });
    re.find_iter(text)
        .map(|m| LinkSpan::new(m.start(), m.end()))
        .collect()
}

#[cfg(not(feature = "linkify"))]
pub(crate) fn find_links(_text: &str) -> Vec<LinkSpan> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "linkify")]
    fn finds_urls() {
        let text = "see https://example.com/a and http://b.io.";
        let links = find_links(text);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text(text), "https://example.com/a");
        assert_eq!(links[1].text(text), "http://b.io.");
    }

    #[test]
    #[cfg(feature = "linkify")]
    fn plain_text_has_no_links() {
        assert!(find_links("no urls here").is_empty());
    }

    #[test]
    fn span_contains_bytes() {
        let span = LinkSpan::new(4, 8);
        assert!(span.contains(4));
        assert!(span.contains(7));
        assert!(!span.contains(8));
        assert!(!span.contains(0));
    }
}
