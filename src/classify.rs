//! # Dash-Significance Classification
//!
//! Product codes look like `<prefix>-<suffix>`. For most product lines the
//! hyphen is formatting noise and must be stripped before encoding; for a
//! registered set of prefixes it is part of the payload and stays. This
//! module decides which case applies.
//!
//! Codes pasted from documents occasionally arrive with an en-dash
//! (U+2013) instead of a plain hyphen; that is normalized first, before
//! the prefix is extracted and before the dash-significance decision.
//!
//! ## Usage
//!
//! ```
//! use etiketa::classify::{classify, PrefixRegistry};
//!
//! let registry = PrefixRegistry::new(["HF-"]);
//!
//! assert_eq!(classify("HF-0042", &registry), "HF-0042");
//! assert_eq!(classify("PX-0042", &registry), "PX0042");
//! ```

use std::collections::BTreeSet;

/// En-dash, the usual word-processor substitution for a typed hyphen.
const EN_DASH: char = '\u{2013}';

/// Registry of prefixes whose hyphens are significant.
///
/// Entries are stored in the lookup-key form `"<PREFIX>-"`. The registry
/// is plain injected configuration: build one from whatever source the
/// caller has (flags, a config file, a hard-coded list) and pass it to
/// [`classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixRegistry {
    entries: BTreeSet<String>,
}

impl PrefixRegistry {
    /// Build a registry from prefix entries.
    ///
    /// Entries are trimmed and given a trailing hyphen when they lack one,
    /// so `"HF"` and `"HF-"` register the same prefix. Entries that are
    /// empty after trimming are ignored.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|entry| {
                let bare = entry.as_ref().trim().trim_end_matches('-');
                if bare.is_empty() {
                    None
                } else {
                    Some(format!("{bare}-"))
                }
            })
            .collect();
        Self { entries }
    }

    /// Whether `key` (in `"<PREFIX>-"` form) is registered.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// Registered entries in `"<PREFIX>-"` form, sorted.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trim surrounding whitespace and replace every en-dash with a hyphen.
///
/// Runs before prefix extraction; idempotent.
pub fn normalize_code(code: &str) -> String {
    code.trim().replace(EN_DASH, "-")
}

/// The code's prefix: everything before the first hyphen, or the whole
/// code when it contains none.
pub fn prefix_of(code: &str) -> &str {
    match code.find('-') {
        Some(index) => &code[..index],
        None => code,
    }
}

/// Decide dash significance and return the text to encode.
///
/// The code is normalized via [`normalize_code`], then its prefix is
/// looked up in the registry as `"<PREFIX>-"`. Registered codes keep
/// their hyphens verbatim; all other codes have every hyphen deleted.
/// A code without hyphens passes through unchanged either way.
pub fn classify(code: &str, registry: &PrefixRegistry) -> String {
    let code = normalize_code(code);
    let key = format!("{}-", prefix_of(&code));
    if registry.contains_key(&key) {
        code
    } else {
        code.replace('-', "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> PrefixRegistry {
        PrefixRegistry::new(["ABC-"])
    }

    #[test]
    fn test_registered_prefix_keeps_hyphens() {
        assert_eq!(classify("ABC-123", &registry()), "ABC-123");
        assert_eq!(classify("ABC-12-34", &registry()), "ABC-12-34");
    }

    #[test]
    fn test_unregistered_prefix_strips_hyphens() {
        assert_eq!(classify("XYZ-123", &registry()), "XYZ123");
        assert_eq!(classify("X-Y-Z", &registry()), "XYZ");
    }

    #[test]
    fn test_en_dash_normalized_before_lookup() {
        assert_eq!(classify("ABC\u{2013}123", &registry()), "ABC-123");
        assert_eq!(classify("XYZ\u{2013}123", &registry()), "XYZ123");
    }

    #[test]
    fn test_no_hyphen_passes_through() {
        assert_eq!(classify("ABC123", &registry()), "ABC123");
        assert_eq!(classify("plain", &registry()), "plain");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(classify("  ABC-123 \t", &registry()), "ABC-123");
    }

    #[test]
    fn test_prefix_of() {
        assert_eq!(prefix_of("ABC-123"), "ABC");
        assert_eq!(prefix_of("ABC-12-34"), "ABC");
        assert_eq!(prefix_of("ABC123"), "ABC123");
        assert_eq!(prefix_of("-123"), "");
    }

    #[test]
    fn test_normalize_code_idempotent() {
        let once = normalize_code(" ABC\u{2013}123 ");
        assert_eq!(once, "ABC-123");
        assert_eq!(normalize_code(&once), once);
    }

    #[test]
    fn test_registry_normalizes_entries() {
        let registry = PrefixRegistry::new(["HF", " ABC- ", "", "  "]);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains_key("HF-"));
        assert!(registry.contains_key("ABC-"));
        assert_eq!(registry.entries().collect::<Vec<_>>(), vec!["ABC-", "HF-"]);
    }

    #[test]
    fn test_exact_match_only() {
        // "ABC-" registered does not cover "ABCD-" or "AB-".
        assert_eq!(classify("ABCD-1", &registry()), "ABCD1");
        assert_eq!(classify("AB-1", &registry()), "AB1");
    }
}
