//! The eight puzzle rule families and the task registry.
//!
//! Every generator follows the same shape:
//! 1. draw the puzzle-wide structural parameters once (sequence length,
//!    alphabet, kernel size, step),
//! 2. loop `examplars + 1` times producing one example per iteration with
//!    freshly randomized content under those fixed parameters,
//! 3. return the bundle; the final example is the held-out query.
//!
//! All randomness flows through the caller's `ChaCha8Rng`, so a seeded run
//! is fully reproducible.
//!
//! # Soft placement failures
//!
//! The placement-based families tolerate `randomly_place_element` finding no
//! valid slot: the sequence is used unchanged and the example may degenerate
//! to a no-op transformation. That is accepted behavior, never retried.

use crate::error::{Error, Result};
use crate::puzzle::{Puzzle, PuzzleExample, SymbolSeq};
use crate::sequence::{add, dilate, randomly_place_element, replace, subtract};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Default number of fully revealed demonstrations per puzzle.
pub const DEFAULT_EXAMPLARS: usize = 3;

/// Label pools for `colored_ordering`.
const COLORS: [&str; 10] = [
    "Red", "Green", "Yellow", "Blue", "Purple", "Orange", "Black", "White", "Brown", "Pink",
];
const ANIMALS: [&str; 10] = [
    "Dog", "Cat", "Bird", "Fish", "Rabbit", "Horse", "Cow", "Pig", "Sheep", "Chicken",
];
const COUNTRIES: [&str; 10] = [
    "USA", "Canada", "Mexico", "Brazil", "Argentina", "Chile", "Peru", "Colombia", "Venezuela",
    "Ecuador",
];

/// Filler symbols the letter-sequence families draw backgrounds from.
const BACKGROUNDS: [char; 4] = ['x', '+', '-', '*'];

/// A zero-state puzzle factory: explicit RNG in, one puzzle out.
pub type GeneratorFn = fn(&mut ChaCha8Rng, usize) -> Result<Puzzle>;

/// Task registry: name to generator, in canonical emission order.
pub const TASKS: &[(&str, GeneratorFn)] = &[
    ("colored_ordering", colored_ordering),
    ("incrementing_pattern", incrementing_pattern),
    ("sequence_completion", sequence_completion),
    ("repeating_symetry", repeating_symmetry),
    ("string_dilation", string_dilation),
    ("string_dilation2", string_dilation2),
    ("string_dilation3", string_dilation3),
    ("fill_between", fill_between),
];

/// Look up a registered generator by task name.
pub fn lookup(name: &str) -> Result<GeneratorFn> {
    TASKS
        .iter()
        .find(|(task, _)| *task == name)
        .map(|(_, gen)| *gen)
        .ok_or_else(|| Error::UnknownTask(name.to_string()))
}

/// One uniform uppercase letter.
fn uppercase(rng: &mut ChaCha8Rng) -> char {
    char::from(b'A' + rng.gen_range(0..26))
}

/// `n` distinct uppercase letters in uniformly random order.
fn distinct_uppercase(rng: &mut ChaCha8Rng, n: usize) -> Vec<char> {
    let mut pool: Vec<char> = ('A'..='Z').collect();
    let (picked, _) = pool.partial_shuffle(rng, n);
    picked.to_vec()
}

/// One uniform background filler symbol.
fn background(rng: &mut ChaCha8Rng) -> char {
    BACKGROUNDS[rng.gen_range(0..BACKGROUNDS.len())]
}

/// The alphabetic run `start, start+step, start+2*step, ...` of `length`
/// letters, wrapping Z back to A.
fn letter_run(start: char, length: usize, step: usize) -> Vec<char> {
    let base = start as usize - 'A' as usize;
    (0..length)
        .map(|i| char::from(b'A' + ((base + i * step) % 26) as u8))
        .collect()
}

/// Map `k` distinct numbers to `k` distinct labels by ascending rank.
///
/// The label assignment (category and which labels, in which rank order) is
/// fixed once per puzzle; each example shows fresh numbers in random order
/// and answers with the labels their ranks map to.
pub fn colored_ordering(rng: &mut ChaCha8Rng, examplars: usize) -> Result<Puzzle> {
    const CATEGORIES: [&[&str]; 3] = [&COLORS, &ANIMALS, &COUNTRIES];

    let num_elements = rng.gen_range(4..=6);
    let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];

    let mut pool: Vec<&str> = category.to_vec();
    let (picked, _) = pool.partial_shuffle(rng, num_elements);
    let labels: Vec<String> = picked.iter().map(|s| s.to_string()).collect();

    let mut examples = Vec::with_capacity(examplars + 1);
    for _ in 0..=examplars {
        let mut candidates: Vec<u32> = (1..=20).collect();
        let (drawn, _) = candidates.partial_shuffle(rng, num_elements);
        let numbers = drawn.to_vec();

        let mut ranked = numbers.clone();
        ranked.sort_unstable();
        let mapping: HashMap<u32, String> =
            ranked.iter().copied().zip(labels.iter().cloned()).collect();

        let answer: Vec<String> = numbers.iter().map(|n| mapping[n].clone()).collect();
        examples.push(PuzzleExample::new(
            SymbolSeq::Numbers(numbers),
            SymbolSeq::Tokens(answer),
        ));
    }
    Ok(Puzzle::new(examples))
}

/// Letters advance by a fixed step modulo 26; predict the next one.
pub fn incrementing_pattern(rng: &mut ChaCha8Rng, examplars: usize) -> Result<Puzzle> {
    let length = rng.gen_range(6..=10);
    let step = rng.gen_range(1..=5);

    let mut examples = Vec::with_capacity(examplars + 1);
    for _ in 0..=examplars {
        let start = uppercase(rng);
        let run = letter_run(start, length, step);
        let answer = run[length - 1];
        examples.push(PuzzleExample::new(
            SymbolSeq::letters(run[..length - 1].iter().copied()),
            SymbolSeq::letters([answer]),
        ));
    }
    Ok(Puzzle::new(examples))
}

/// Masked alphabetic run: the 3 letters before the tail are blanked with
/// `'*'`, the 3 tail positions are marked `'?'`; the answer is the tail.
pub fn sequence_completion(rng: &mut ChaCha8Rng, examplars: usize) -> Result<Puzzle> {
    const SKIPS: usize = 3;
    const PREDICT: usize = 3;
    const SKIP_CHAR: char = '*';
    const PREDICT_CHAR: char = '?';

    let mut examples = Vec::with_capacity(examplars + 1);
    for _ in 0..=examplars {
        let length = rng.gen_range(13..=16);
        let start = rng.gen_range(0..=6);
        let run = letter_run(char::from(b'A' + start as u8), length, 1);

        let answer = run[length - PREDICT..].to_vec();
        let mut question = run;
        question[length - SKIPS - PREDICT..length - PREDICT].fill(SKIP_CHAR);
        question[length - PREDICT..].fill(PREDICT_CHAR);

        examples.push(PuzzleExample::new(
            SymbolSeq::letters(question),
            SymbolSeq::letters(answer),
        ));
    }

    Ok(Puzzle::new(examples).with_instructions(format!(
        "The question is a sequence of letters. \
         The answer is the last {} letters of the sequence, \
         The letters represented by a '{}' should be ignored.",
        PREDICT, SKIP_CHAR
    )))
}

/// A small letter set expanded by repeating it, alternating forward and
/// reverse order. The repeat count is fixed per puzzle; the set (and its
/// size) is redrawn per example.
///
/// Registered as `repeating_symetry`, the task's historical name.
///
/// Caller contract: `examplars <= 5` so the repeat range stays non-empty.
pub fn repeating_symmetry(rng: &mut ChaCha8Rng, examplars: usize) -> Result<Puzzle> {
    let repeats = rng.gen_range(examplars.saturating_sub(1)..=4);

    let mut examples = Vec::with_capacity(examplars + 1);
    for _ in 0..=examplars {
        let n = rng.gen_range(3..=5);
        let letters = distinct_uppercase(rng, n);

        let mut answer = Vec::with_capacity(n * repeats);
        for j in 0..repeats {
            if j % 2 == 0 {
                answer.extend(letters.iter().copied());
            } else {
                answer.extend(letters.iter().rev().copied());
            }
        }

        examples.push(PuzzleExample::new(
            SymbolSeq::letters(letters),
            SymbolSeq::letters(answer),
        ));
    }
    Ok(Puzzle::new(examples))
}

/// One target letter in a background sequence; the answer dilates it with a
/// uniform run of the target letter as the structuring element.
pub fn string_dilation(rng: &mut ChaCha8Rng, examplars: usize) -> Result<Puzzle> {
    let element_len = rng.gen_range(3..=5);
    let seqlen = rng.gen_range(8..=15);

    let mut examples = Vec::with_capacity(examplars + 1);
    for _ in 0..=examplars {
        let bg = background(rng);
        let target = uppercase(rng);

        let mut question = vec![bg; seqlen];
        question[rng.gen_range(0..seqlen)] = target;

        let element = vec![target; element_len];
        let answer = dilate(&question, &element, 1);

        examples.push(PuzzleExample::new(
            SymbolSeq::letters(question),
            SymbolSeq::letters(answer),
        ));
    }
    Ok(Puzzle::new(examples))
}

/// Build one `string_dilation2` example from explicit parameters.
///
/// The lone targets are written first and the marker second, so the marker
/// may overwrite them, and a lone target that happens to sit next to the
/// marker is never re-surrounded. That asymmetry can make an example
/// inconsistent with the latent rule; it is intentional, reproduced behavior
/// (see the pinned quirk test below).
fn surround_example(
    bg: char,
    target: char,
    singles: &[usize],
    marker_idx: usize,
    seqlen: usize,
) -> PuzzleExample {
    let surround = char::from(target as u8 + 1);
    let marker = [surround, target, target, surround];

    let mut seq = vec![bg; seqlen];
    for &p in singles {
        seq[p] = target;
    }
    seq[marker_idx..marker_idx + marker.len()].copy_from_slice(&marker);

    let question = replace(&seq, &surround, &bg);
    PuzzleExample::new(SymbolSeq::letters(question), SymbolSeq::letters(seq))
}

/// A `[surround, target, target, surround]` marker (surround = successor
/// letter) placed once, plus 0-3 scattered lone targets. The question blanks
/// every surround; the answer is the untouched original.
pub fn string_dilation2(rng: &mut ChaCha8Rng, examplars: usize) -> Result<Puzzle> {
    let seqlen = rng.gen_range(8..=15);

    let mut examples = Vec::with_capacity(examplars + 1);
    for _ in 0..=examplars {
        let bg = background(rng);
        // Exclude Z so the surround letter exists.
        let target = char::from(b'A' + rng.gen_range(0..25));

        let n_singles = rng.gen_range(0..=3);
        let singles: Vec<usize> = (0..n_singles).map(|_| rng.gen_range(0..seqlen)).collect();
        let marker_idx = rng.gen_range(0..=seqlen - 5);

        examples.push(surround_example(bg, target, &singles, marker_idx, seqlen));
    }
    Ok(Puzzle::new(examples))
}

/// A shuffled kernel (one query letter plus filler letters) is placed into
/// background; 1-2 further placements of the same kernel are attempted on a
/// copy and subtracted against the original to isolate the newly added
/// cells. The query letter's residue is recolored to a third letter and
/// overlaid onto the question; the answer scrubs the query letter entirely.
pub fn string_dilation3(rng: &mut ChaCha8Rng, examplars: usize) -> Result<Puzzle> {
    let kernel_size = rng.gen_range(2..=3) + 1;
    let seqlen = rng.gen_range(3 * kernel_size - 1..=15);

    let mut examples = Vec::with_capacity(examplars + 1);
    for _ in 0..=examplars {
        let bg = background(rng);
        let picked = distinct_uppercase(rng, 3);
        let (kernel_letter, query_letter, target_letter) = (picked[0], picked[1], picked[2]);

        let mut kernel = vec![kernel_letter; kernel_size];
        kernel[0] = query_letter;
        kernel.shuffle(rng);

        let blank = vec![bg; seqlen];
        let (question, _) = randomly_place_element(rng, &blank, &kernel, &bg, true);

        // Extra placements may find no slot; the copy stays unchanged then
        // and the subtraction below degenerates to all-background.
        let mut overlaid = question.clone();
        for _ in 0..rng.gen_range(1..=2) {
            let (next, _placed) = randomly_place_element(rng, &overlaid, &kernel, &bg, true);
            overlaid = next;
        }
        let stamped = subtract(&overlaid, &question, &bg)?;

        let recolored: Vec<char> = stamped
            .iter()
            .map(|&c| if c == query_letter { target_letter } else { bg })
            .collect();
        let question = add(&question, &recolored, &bg)?;
        let answer = replace(&stamped, &query_letter, &bg);

        examples.push(PuzzleExample::new(
            SymbolSeq::letters(question),
            SymbolSeq::letters(answer),
        ));
    }
    Ok(Puzzle::new(examples))
}

/// Build one `fill_between` example from explicit parameters.
///
/// The answer fills `[a, b]` inclusively with the target letter, in place;
/// everything outside the span matches the question.
fn fill_between_example(
    bg: char,
    target: char,
    other: char,
    a: usize,
    b: usize,
    other_idx: usize,
    seqlen: usize,
) -> PuzzleExample {
    let mut question = vec![bg; seqlen];
    question[a] = target;
    question[b] = target;
    question[other_idx] = other;

    let mut answer = vec![bg; seqlen];
    for cell in &mut answer[a..=b] {
        *cell = target;
    }
    answer[other_idx] = other;

    PuzzleExample::new(SymbolSeq::letters(question), SymbolSeq::letters(answer))
}

/// Two occurrences of a target letter with one unrelated letter outside
/// their span; the answer fills the span (inclusive) with the target.
pub fn fill_between(rng: &mut ChaCha8Rng, examplars: usize) -> Result<Puzzle> {
    let seqlen = rng.gen_range(8..=15);

    let mut examples = Vec::with_capacity(examplars + 1);
    for _ in 0..=examplars {
        let bg = background(rng);
        let target = uppercase(rng);
        let other = loop {
            let candidate = uppercase(rng);
            if candidate != target {
                break candidate;
            }
        };

        let span = rng.gen_range(3..=6);
        let a = rng.gen_range(0..=seqlen - span - 1);
        let b = a + span;

        // Any index strictly outside [a, b]; always non-empty given
        // seqlen >= 8 and span <= 6.
        let candidates: Vec<usize> = (0..seqlen).filter(|&i| i < a || i > b).collect();
        let other_idx = candidates[rng.gen_range(0..candidates.len())];

        examples.push(fill_between_example(bg, target, other, a, b, other_idx, seqlen));
    }
    Ok(Puzzle::new(examples))
}
