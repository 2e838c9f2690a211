// crates/school-core/src/traits.rs
use crate::model::School;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get [`NameMatch::name_contains`], a
/// case-insensitive substring match on the folded form.
///
/// # Examples
/// ```rust
/// use school_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Yale").name_contains("YALE"));
/// assert!(Place("School A").name_contains("sch"));
/// assert!(Place("Anything").name_contains(""));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive substring match. The empty query matches everything.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for School {
    fn name_str(&self) -> &str {
        self.name()
    }
}
