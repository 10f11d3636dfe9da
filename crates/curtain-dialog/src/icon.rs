#![forbid(unsafe_code)]

//! Icon identifiers and glyph resolution.
//!
//! Icons are referenced by name and resolved to a displayable glyph by an
//! [`IconResolver`]. Resolution failure is not fatal anywhere in the dialog:
//! the corresponding element falls back to "no icon".

use crate::error::DialogError;

/// A named icon reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconId(String);

impl IconId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for IconId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A resolved, displayable icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: char,
}

impl Glyph {
    pub const fn new(symbol: char) -> Self {
        Self { symbol }
    }
}

/// Resolves icon references to glyphs.
pub trait IconResolver {
    fn resolve(&self, id: &IconId) -> Result<Glyph, DialogError>;
}

/// The built-in name → glyph table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    entries: Vec<(String, char)>,
}

impl Default for GlyphTable {
    fn default() -> Self {
        let entries = [
            ("info", 'ℹ'),
            ("warning", '⚠'),
            ("error", '✖'),
            ("check", '✔'),
            ("cross", '✘'),
            ("question", '?'),
            ("link", '↗'),
            ("gear", '⚙'),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(name, symbol)| (name.to_string(), symbol))
                .collect(),
        }
    }
}

impl GlyphTable {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add or replace an entry.
    pub fn with(mut self, name: impl Into<String>, symbol: char) -> Self {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = symbol;
        } else {
            self.entries.push((name, symbol));
        }
        self
    }
}

impl IconResolver for GlyphTable {
    fn resolve(&self, id: &IconId) -> Result<Glyph, DialogError> {
        self.entries
            .iter()
            .find(|(name, _)| name == id.as_str())
            .map(|&(_, symbol)| Glyph::new(symbol))
            .ok_or_else(|| DialogError::IconResolve {
                id: id.as_str().to_string(),
            })
    }
}
