use alloc::vec::Vec;
use core::cmp::Ordering;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{ascii_nondigit_cmp, compare, compare_with};

/// Maps arbitrary bytes onto an alphabet dense in digits, zeros, case pairs,
/// and separators, so random inputs actually exercise the numeric and
/// case-folding paths.
fn densify(raw: &[u8]) -> Vec<u8> {
    const ALPHABET: &[u8; 16] = b"00123899aAbBz. -";
    raw.iter().map(|&b| ALPHABET[usize::from(b & 0x0f)]).collect()
}

fn qc_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

#[quickcheck]
fn reflexive(x: Vec<u8>) -> bool {
    let x = densify(&x);
    compare(&x, &x) == Ordering::Equal
}

#[quickcheck]
fn default_strategy_is_the_ascii_strategy(x: Vec<u8>, y: Vec<u8>) -> bool {
    let x = densify(&x);
    let y = densify(&y);
    compare(&x, &y) == compare_with(&x, &y, ascii_nondigit_cmp)
}

#[test]
fn antisymmetric() {
    fn prop(x: Vec<u8>, y: Vec<u8>) -> bool {
        let x = densify(&x);
        let y = densify(&y);
        compare(&x, &y) == compare(&y, &x).reverse()
    }

    QuickCheck::new()
        .tests(qc_tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
}

#[test]
fn transitive() {
    fn prop(x: Vec<u8>, y: Vec<u8>, z: Vec<u8>) -> bool {
        let x = densify(&x);
        let y = densify(&y);
        let z = densify(&z);
        let mut sorted = [&x, &y, &z];
        sorted.sort_by(|a, b| compare(a, b));
        compare(sorted[0], sorted[1]) != Ordering::Greater
            && compare(sorted[1], sorted[2]) != Ordering::Greater
            && compare(sorted[0], sorted[2]) != Ordering::Greater
    }

    QuickCheck::new()
        .tests(qc_tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>, Vec<u8>) -> bool);
}

#[test]
fn digit_free_lowercase_inputs_order_lexicographically() {
    fn prop(x: Vec<u8>, y: Vec<u8>) -> bool {
        fn letters(raw: &[u8]) -> Vec<u8> {
            const ALPHABET: &[u8; 16] = b"abcdefgh.- _~!qz";
            raw.iter().map(|&b| ALPHABET[usize::from(b & 0x0f)]).collect()
        }
        let x = letters(&x);
        let y = letters(&y);
        compare(&x, &y) == x.cmp(&y)
    }

    QuickCheck::new()
        .tests(qc_tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
}
