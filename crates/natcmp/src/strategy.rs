//! Pluggable comparison of non-digit segments.
//!
//! The natural comparator delegates every run of non-digit bytes to a
//! strategy, keeping numeric-run handling fixed while letting callers choose
//! the text semantics (case-insensitive display names, exact-byte file
//! names, and so on). A strategy is any `FnMut(&[u8], &[u8]) -> NonDigitCmp`
//! invoked on the remaining suffixes of both inputs, each positioned at a
//! non-digit byte.

use core::cmp::Ordering;

/// Outcome of comparing the leading non-digit runs of two byte strings.
///
/// End offsets exist only on the [`Equal`](NonDigitCmp::Equal) variant: when
/// the runs differ the overall comparison is already decided, so there is no
/// position for the caller to resume from.
///
/// # Strategy contract
///
/// On [`Equal`](NonDigitCmp::Equal), `end_a` and `end_b` are offsets into
/// the suffixes the strategy was given, and each must land on an ASCII digit
/// or the end of its suffix (at least one of them must; the other may stop
/// on the byte that ended the shared prefix). A strategy must not report
/// equal runs via `Ordered(Ordering::Equal)` — doing so terminates the whole
/// comparison with equality instead of continuing past the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonDigitCmp {
    /// The runs differ; this ordering is the final comparison result.
    Ordered(Ordering),
    /// The runs are equal under the strategy; scanning stopped at `end_a`
    /// and `end_b`.
    Equal {
        /// Offset of the first digit (or the end) in the first suffix.
        end_a: usize,
        /// Offset of the first digit (or the end) in the second suffix.
        end_b: usize,
    },
}

/// Length of the leading run of non-digit bytes.
fn nondigit_len(s: &[u8]) -> usize {
    s.iter().position(u8::is_ascii_digit).unwrap_or(s.len())
}

/// The default non-digit strategy: ASCII case-insensitive.
///
/// Compares the leading non-digit runs of `a` and `b` with an ASCII-only
/// case fold (bytes outside `A`-`Z`/`a`-`z` compare as-is). Content is the
/// first key and run length the second: the shared-length prefixes are
/// compared first, and only when they match does a shorter run order before
/// a longer one. Both keys must match for the runs to count as equal.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use natcmp::{NonDigitCmp, ascii_nondigit_cmp};
///
/// assert_eq!(
///     ascii_nondigit_cmp(b"abc123", b"ABC9"),
///     NonDigitCmp::Equal { end_a: 3, end_b: 3 },
/// );
/// assert_eq!(
///     ascii_nondigit_cmp(b"abd", b"abc"),
///     NonDigitCmp::Ordered(Ordering::Greater),
/// );
/// ```
#[must_use]
pub fn ascii_nondigit_cmp(a: &[u8], b: &[u8]) -> NonDigitCmp {
    let len_a = nondigit_len(a);
    let len_b = nondigit_len(b);

    let shared = len_a.min(len_b);
    for (&x, &y) in a[..shared].iter().zip(&b[..shared]) {
        let cmp = x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase());
        if cmp != Ordering::Equal {
            return NonDigitCmp::Ordered(cmp);
        }
    }

    if len_a != len_b {
        // Content matched up to the shorter run; the shorter run wins.
        return NonDigitCmp::Ordered(len_a.cmp(&len_b));
    }

    NonDigitCmp::Equal {
        end_a: len_a,
        end_b: len_b,
    }
}

/// Exact-byte (case-sensitive) non-digit strategy.
///
/// Same contract and two-key ordering as [`ascii_nondigit_cmp`], without
/// the case fold. Useful when natural ordering is wanted over identifiers
/// where `"a"` and `"A"` are distinct.
#[must_use]
pub fn bytewise_nondigit_cmp(a: &[u8], b: &[u8]) -> NonDigitCmp {
    let len_a = nondigit_len(a);
    let len_b = nondigit_len(b);

    let shared = len_a.min(len_b);
    match a[..shared].cmp(&b[..shared]) {
        Ordering::Equal => {}
        cmp => return NonDigitCmp::Ordered(cmp),
    }

    if len_a != len_b {
        return NonDigitCmp::Ordered(len_a.cmp(&len_b));
    }

    NonDigitCmp::Equal {
        end_a: len_a,
        end_b: len_b,
    }
}
