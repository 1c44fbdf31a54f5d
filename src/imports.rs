//! Import-literal extraction
//!
//! Finds every `from '<target>'` / `from "<target>"` clause in a file and
//! lets a callback decide on a replacement target. Substitution is a single
//! left-to-right pass; replaced text is never rescanned.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

// The target runs up to the next quote of the same kind and never spans a line.
static IMPORT_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"from\s+(?:'([^'\n]+)'|"([^"\n]+)")"#).expect("IMPORT_FROM regex is invalid")
});

/// Quote character delimiting an import literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// A located `from <quote><target><quote>` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportLiteral<'a> {
    pub quote: Quote,
    pub target: &'a str,
}

impl ImportLiteral<'_> {
    /// Whether the target is relative (`./x`, `../x`, `.`).
    pub fn is_relative(&self) -> bool {
        self.target.starts_with('.')
    }

    /// Render a `from` clause for `target` using this literal's quote.
    pub fn render(&self, target: &str) -> String {
        let q = self.quote.as_char();
        format!("from {q}{target}{q}")
    }
}

fn literal_from_captures<'a>(caps: &Captures<'a>) -> Option<ImportLiteral<'a>> {
    if let Some(m) = caps.get(1) {
        Some(ImportLiteral {
            quote: Quote::Single,
            target: m.as_str(),
        })
    } else {
        caps.get(2).map(|m| ImportLiteral {
            quote: Quote::Double,
            target: m.as_str(),
        })
    }
}

/// Result of rewriting the import literals of one file.
#[derive(Debug)]
pub struct Rewritten<'a> {
    pub content: Cow<'a, str>,
    /// Number of literals whose target was replaced
    pub rewrites: usize,
    /// Targets left alone because their closing quote was escaped
    pub skipped: Vec<String>,
}

impl Rewritten<'_> {
    pub fn is_changed(&self) -> bool {
        matches!(self.content, Cow::Owned(_))
    }
}

/// Find all import literals in document order.
pub fn find_imports(content: &str) -> Vec<ImportLiteral<'_>> {
    IMPORT_FROM
        .captures_iter(content)
        .filter_map(|caps| literal_from_captures(&caps))
        .collect()
}

/// Rewrite every import literal for which `rewrite` returns a new target.
///
/// A callback result equal to the current target counts as no rewrite. A
/// target ending in a backslash means the quote was escaped; those are
/// reported in `skipped` and left unchanged.
pub fn rewrite_imports<'a, F>(content: &'a str, mut rewrite: F) -> Rewritten<'a>
where
    F: FnMut(&ImportLiteral<'_>) -> Option<String>,
{
    let mut rewrites = 0;
    let mut skipped = Vec::new();

    let replaced = IMPORT_FROM.replace_all(content, |caps: &Captures<'_>| {
        let original = caps[0].to_string();
        let Some(literal) = literal_from_captures(caps) else {
            return original;
        };
        if literal.target.ends_with('\\') {
            skipped.push(literal.target.to_string());
            return original;
        }
        match rewrite(&literal) {
            Some(target) if target != literal.target => {
                rewrites += 1;
                literal.render(&target)
            }
            _ => original,
        }
    });

    // replace_all allocates as soon as any match exists, even when all text is kept
    let content = if rewrites == 0 {
        Cow::Borrowed(content)
    } else {
        replaced
    };

    Rewritten {
        content,
        rewrites,
        skipped,
    }
}
