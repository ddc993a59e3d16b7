//! Natural-order ("version sort") comparison for byte strings.
//!
//! Embedded runs of ASCII digits compare by numeric value rather than byte
//! value, so `"file2"` sorts before `"file10"`. Comparison is digit by
//! digit — no number is ever parsed out, so runs of any length order
//! correctly — and numerically equal runs are tie-broken by leading-zero
//! count (`"02"` before `"002"`), keeping the order total.
//!
//! The text between digit runs goes through a pluggable strategy. The
//! default is ASCII case-insensitive; [`compare_with`] accepts any
//! [`NonDigitCmp`]-returning function, so case-sensitive or bespoke
//! collation of the textual parts composes with the fixed numeric-run
//! handling.
//!
//! Inputs are byte slices, not `str`: file names and other OS-supplied
//! strings are not guaranteed to be UTF-8, and the algorithm only ever
//! classifies single bytes as ASCII digit or not. The comparator never
//! allocates.
//!
//! ```
//! use core::cmp::Ordering;
//! use natcmp::{Natural, compare};
//!
//! assert_eq!(compare("file2.txt", "file10.txt"), Ordering::Less);
//!
//! let mut names = vec!["a10.log", "a2.log", "a02.log", "b1.log"];
//! names.sort_by_key(|n| Natural(*n));
//! assert_eq!(names, ["a2.log", "a02.log", "a10.log", "b1.log"]);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod compare;
mod natural;
mod strategy;

#[cfg(test)]
mod tests;

pub use compare::{compare, compare_with};
pub use natural::Natural;
pub use strategy::{NonDigitCmp, ascii_nondigit_cmp, bytewise_nondigit_cmp};
