//! The natural-order comparator.

use core::cmp::Ordering;

use crate::strategy::{NonDigitCmp, ascii_nondigit_cmp};

/// A digit run at the head of a suffix. Offsets are relative to the suffix;
/// the run always starts at 0.
struct DigitRun {
    /// Offset of the first significant digit. For an all-zero run this is
    /// the last zero, so the run is never empty.
    digits: usize,
    /// Offset one past the last digit of the run.
    tail: usize,
}

impl DigitRun {
    /// Scans the digit run at the head of `s`. The first byte must be an
    /// ASCII digit.
    fn scan(s: &[u8]) -> Self {
        debug_assert!(s.first().is_some_and(u8::is_ascii_digit));

        let mut digits = 0;
        while s[digits] == b'0' && s.get(digits + 1).is_some_and(u8::is_ascii_digit) {
            digits += 1;
        }

        let mut tail = digits;
        while tail < s.len() && s[tail].is_ascii_digit() {
            tail += 1;
        }

        DigitRun { digits, tail }
    }

    /// The run with leading zeros stripped.
    fn significant<'a>(&self, s: &'a [u8]) -> &'a [u8] {
        &s[self.digits..self.tail]
    }
}

/// Compares two byte strings in natural order with the default ASCII
/// case-insensitive treatment of non-digit segments.
///
/// Runs of ASCII digits are compared by numeric value, digit by digit, so
/// no number is ever materialized and runs of any length are handled.
/// Numerically equal runs with different leading-zero counts are ordered
/// deterministically: more leading zeros sorts last. Everything between
/// digit runs is compared case-insensitively (ASCII fold only).
///
/// Inputs are plain byte slices; there is no terminator convention and
/// interior `0x00` bytes are ordinary non-digit bytes. The function is
/// total: every pair of slices produces an [`Ordering`].
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use natcmp::compare;
///
/// assert_eq!(compare("file2.txt", "file10.txt"), Ordering::Less);
/// assert_eq!(compare("abc", "ABC"), Ordering::Equal);
/// assert_eq!(compare("file02.txt", "file002.txt"), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Ordering {
    compare_with(a, b, ascii_nondigit_cmp)
}

/// Compares two byte strings in natural order with a caller-supplied
/// non-digit strategy.
///
/// The strategy is invoked whenever both cursors sit on a non-digit byte,
/// receives the remaining suffix of each input, and must honor the contract
/// documented on [`NonDigitCmp`]. Digit-run handling is fixed and identical
/// to [`compare`].
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use natcmp::{bytewise_nondigit_cmp, compare_with};
///
/// // Case-sensitive text, numeric digit runs.
/// assert_eq!(
///     compare_with("abc", "ABC", bytewise_nondigit_cmp),
///     Ordering::Greater,
/// );
/// assert_eq!(
///     compare_with("a2.txt", "a10.txt", bytewise_nondigit_cmp),
///     Ordering::Less,
/// );
/// ```
#[must_use]
pub fn compare_with<F>(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>, mut nondigit: F) -> Ordering
where
    F: FnMut(&[u8], &[u8]) -> NonDigitCmp,
{
    let a = a.as_ref();
    let b = b.as_ref();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let mut digit_a = a[i].is_ascii_digit();
        let mut digit_b = b[j].is_ascii_digit();

        if !digit_a && !digit_b {
            match nondigit(&a[i..], &b[j..]) {
                NonDigitCmp::Ordered(ordering) => return ordering,
                NonDigitCmp::Equal { end_a, end_b } => {
                    i += end_a;
                    j += end_b;
                }
            }
            if i == a.len() || j == b.len() {
                break;
            }
            digit_a = a[i].is_ascii_digit();
            digit_b = b[j].is_ascii_digit();
        }

        if digit_a != digit_b {
            // A digit orders before any other byte at a classification
            // split.
            return if digit_a {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let run_a = DigitRun::scan(&a[i..]);
        let run_b = DigitRun::scan(&b[j..]);
        let sig_a = run_a.significant(&a[i..]);
        let sig_b = run_b.significant(&b[j..]);

        // Fewer significant digits means a smaller number; with equal
        // counts the magnitude comparison reduces to bytewise order of the
        // digits themselves.
        match sig_a.len().cmp(&sig_b.len()).then_with(|| sig_a.cmp(sig_b)) {
            Ordering::Equal => {}
            ordering => return ordering,
        }

        // Numerically equal: the raw run with more leading zeros sorts
        // last.
        match run_a.tail.cmp(&run_b.tail) {
            Ordering::Equal => {}
            ordering => return ordering,
        }

        i += run_a.tail;
        j += run_b.tail;
    }

    // One or both inputs exhausted; any remaining input sorts after.
    if j < b.len() {
        Ordering::Less
    } else if i < a.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
