//! Ordered wrapper plugging natural comparison into `Ord`-based APIs.

use core::{cmp::Ordering, fmt};

use bstr::BStr;

use crate::compare::compare;

/// A byte string ordered naturally.
///
/// Wraps any byte-string-like value (`&str`, `String`, `&[u8]`, `Vec<u8>`,
/// ...) so it can be handed to `sort`, `BTreeMap`, binary search, and
/// anything else keyed on `Ord`.
///
/// Equality is equivalence under the natural ordering with the default
/// strategy — ASCII case-insensitive, leading-zero-sensitive — and so
/// differs from byte equality: `Natural("abc") == Natural("ABC")`. For the
/// same reason there is no `Hash` impl.
///
/// # Examples
///
/// ```
/// use natcmp::Natural;
///
/// let mut names = vec!["file10", "File2", "file1"];
/// names.sort_by_key(|n| Natural(*n));
/// assert_eq!(names, ["file1", "File2", "file10"]);
/// ```
#[derive(Clone, Copy)]
pub struct Natural<S>(
    /// The wrapped byte string.
    pub S,
);

impl<S> Natural<S> {
    /// Consumes the wrapper, returning the inner value.
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: AsRef<[u8]>> Natural<S> {
    fn as_bstr(&self) -> &BStr {
        BStr::new(self.0.as_ref())
    }
}

impl<S: AsRef<[u8]>> PartialEq for Natural<S> {
    fn eq(&self, other: &Self) -> bool {
        compare(&self.0, &other.0) == Ordering::Equal
    }
}

impl<S: AsRef<[u8]>> Eq for Natural<S> {}

impl<S: AsRef<[u8]>> PartialOrd for Natural<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: AsRef<[u8]>> Ord for Natural<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

impl<S: AsRef<[u8]>> fmt::Debug for Natural<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({:?})", self.as_bstr())
    }
}

impl<S: AsRef<[u8]>> fmt::Display for Natural<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_bstr().fmt(f)
    }
}
