//! Generic primitives over finite sequences of discrete symbols.
//!
//! Several puzzle families are built from the same handful of operations:
//! - finding every spot where a pattern fits into unused background cells
//! - writing a pattern into one uniformly chosen valid spot
//! - element-wise replace / subtract / overlay
//! - a sliding-window "dilation" matcher
//!
//! All functions are pure except for the RNG threaded into
//! [`randomly_place_element`]. Symbols are generic (`char` in practice);
//! only equality and cloning are required.
//!
//! # Placement validity
//!
//! A placement is valid when every cell the element would cover currently
//! holds the background symbol. The element's *contents* never affect
//! validity, only its length. The scan here is the naive O(n·m) one, which
//! considers every candidate start; it never skips a window that follows
//! immediately after a conflicting cell.

use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Find all valid placements of `element` in `seq`.
///
/// Returns every start index at which `element` can be written without
/// overwriting a cell whose current value is not `background`.
///
/// Returns an empty vector when `element` is longer than `seq`.
pub fn valid_placements<T: PartialEq>(seq: &[T], element: &[T], background: &T) -> Vec<usize> {
    if element.is_empty() || element.len() > seq.len() {
        return Vec::new();
    }
    (0..=seq.len() - element.len())
        .filter(|&i| seq[i..i + element.len()].iter().all(|x| x == background))
        .collect()
}

/// Place `element` into a copy of `seq` at a uniformly chosen valid start.
///
/// When `check_valid` is false, every start in `0..seq.len() - element.len()`
/// is treated as a candidate regardless of what it overwrites.
///
/// # Returns
/// The (possibly modified) copy and a success flag. With zero candidate
/// placements the copy is returned unmodified together with `false`; this is
/// a legitimate soft failure, not an error, and callers must continue with
/// the unchanged sequence.
pub fn randomly_place_element<T: Clone + PartialEq>(
    rng: &mut ChaCha8Rng,
    seq: &[T],
    element: &[T],
    background: &T,
    check_valid: bool,
) -> (Vec<T>, bool) {
    let mut out = seq.to_vec();

    let placements: Vec<usize> = if check_valid {
        valid_placements(seq, element, background)
    } else {
        (0..seq.len().saturating_sub(element.len())).collect()
    };

    match placements.choose(rng) {
        None => (out, false),
        Some(&idx) => {
            out[idx..idx + element.len()].clone_from_slice(element);
            (out, true)
        }
    }
}

/// Replace every occurrence of `old` with `new`.
pub fn replace<T: Clone + PartialEq>(seq: &[T], old: &T, new: &T) -> Vec<T> {
    seq.iter()
        .map(|x| if x == old { new.clone() } else { x.clone() })
        .collect()
}

/// Subtract `seq2` from `seq1`.
///
/// Positions equal in both inputs become `background`; positions that differ
/// keep `seq1`'s value.
///
/// # Errors
/// `Error::LengthMismatch` when the inputs differ in length.
pub fn subtract<T: Clone + PartialEq>(seq1: &[T], seq2: &[T], background: &T) -> Result<Vec<T>> {
    if seq1.len() != seq2.len() {
        return Err(Error::LengthMismatch {
            left: seq1.len(),
            right: seq2.len(),
        });
    }
    Ok(seq1
        .iter()
        .zip(seq2)
        .map(|(x, y)| if x == y { background.clone() } else { x.clone() })
        .collect())
}

/// Overlay `seq2` onto `seq1`.
///
/// Every position of `seq1` currently holding `background` takes the
/// corresponding value from `seq2`; all other positions are untouched.
///
/// # Errors
/// `Error::LengthMismatch` when the inputs differ in length.
pub fn add<T: Clone + PartialEq>(seq1: &[T], seq2: &[T], background: &T) -> Result<Vec<T>> {
    if seq1.len() != seq2.len() {
        return Err(Error::LengthMismatch {
            left: seq1.len(),
            right: seq2.len(),
        });
    }
    Ok(seq1
        .iter()
        .zip(seq2)
        .map(|(x, y)| if x == background { y.clone() } else { x.clone() })
        .collect())
}

/// Sliding-window dilation of `input` by a structuring `element`.
///
/// For every window start where the element fits, positional matches against
/// `input` are counted; when the count reaches `match_threshold` the window
/// in the result is overwritten with the element. Windows are evaluated left
/// to right and later overwrites take precedence.
///
/// Consequence worth noting: with threshold 1, a single occurrence of a
/// symbol from a uniform element of length `m` at interior position `p`
/// triggers every window containing `p`, so the overwritten region spans
/// `[p - m + 1, p + m - 1]`, clamped at the sequence edges.
pub fn dilate<T: Clone + PartialEq>(input: &[T], element: &[T], match_threshold: usize) -> Vec<T> {
    let mut result = input.to_vec();
    if element.is_empty() || element.len() > input.len() {
        return result;
    }

    for i in 0..=input.len() - element.len() {
        let matches = element
            .iter()
            .zip(&input[i..i + element.len()])
            .filter(|(e, x)| e == x)
            .count();
        if matches >= match_threshold {
            result[i..i + element.len()].clone_from_slice(element);
        }
    }
    result
}
