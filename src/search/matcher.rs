use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::models::Entry;

/// Subsequence matcher over entry names.
///
/// Runs nucleo's fuzzy matcher without pattern syntax: every character of the query,
/// whitespace included, must occur in the name in order. Matching is case-sensitive and
/// does not normalize accents. nucleo's score is discarded; only match/no-match is used.
///
/// Both sides are compared code point by code point. `Utf32Str::new` and `Atom::new`
/// keep only the first code point of each grapheme cluster, which drops combining marks
/// (`"e\u{301}"` would read as `"e"`), so neither is used here.
pub struct NameMatcher {
    query: String,
    needle: Vec<char>,
    matcher: Matcher,
    buf: Vec<char>,
}

impl NameMatcher {
    pub fn new(query: &str) -> Self {
        let mut config = Config::DEFAULT;
        config.ignore_case = false;
        config.normalize = false;
        let needle = if query.is_ascii() { Vec::new() } else { query.chars().collect() };
        Self { query: query.to_string(), needle, matcher: Matcher::new(config), buf: Vec::new() }
    }

    /// Whether the query is an in-order subsequence of `name`
    pub fn is_match(&mut self, name: &str) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = if self.query.is_ascii() {
            Utf32Str::Ascii(self.query.as_bytes())
        } else {
            Utf32Str::Unicode(&self.needle)
        };
        let haystack = if name.is_ascii() {
            Utf32Str::Ascii(name.as_bytes())
        } else {
            self.buf.clear();
            self.buf.extend(name.chars());
            Utf32Str::Unicode(&self.buf)
        };
        self.matcher.fuzzy_match(haystack, needle).is_some()
    }
}

/// Return the entries whose name matches `query`, in input order
///
/// An empty query matches every entry.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use findit::models::ProjectEntry;
/// use findit::search::search;
///
/// let entry = |name: &str| ProjectEntry {
///     name: name.to_string(),
///     path: format!("/p/{}", name).into(),
///     is_dir: true,
///     modified: Utc::now(),
/// };
/// let matches = search(&[entry("findit"), entry("dotfiles")], "fit");
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].name, "findit");
/// ```
pub fn search<E: Entry + Clone>(entries: &[E], query: &str) -> Vec<E> {
    let mut matcher = NameMatcher::new(query);
    entries.iter().filter(|entry| matcher.is_match(entry.name())).cloned().collect()
}
