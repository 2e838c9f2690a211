// crates/school-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This is plain Unicode lower-casing: `"Ü"` folds to `"ü"`, not `"u"`.
/// Whitespace is kept as-is, so `" u"` and `"u"` are different keys.
///
/// # Examples
///
/// ```rust
/// use school_core::text::fold_key;
///
/// assert_eq!(fold_key("Beta U"), "beta u");
/// assert_eq!(fold_key("ÉCOLE"), "école");
/// ```
#[inline]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_only() {
        assert_eq!(fold_key("MIT"), "mit");
        assert_eq!(fold_key("Zürich"), "zürich");
        assert_ne!(fold_key("Zürich"), "zurich");
    }

    #[test]
    fn keeps_whitespace() {
        assert_eq!(fold_key("  Two  Spaces "), "  two  spaces ");
        assert_ne!(fold_key("a b"), fold_key("ab"));
        assert_eq!(fold_key("Oxford"), fold_key("OXFORD"));
    }
}
