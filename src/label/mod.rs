// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fixed-width label allocation.
//!
//! Labels are base-`|alphabet|` numerals over the alphabet's characters, most
//! significant digit first, left-padded with the alphabet's first character to
//! the session's width. The width is fixed for a whole session so that "is
//! this string a prefix of a valid label" stays well-defined; a variable-width
//! scheme would make prefix matching ambiguous.

use smallvec::{smallvec, SmallVec};
use smol_str::SmolStr;

use crate::model::Alphabet;

/// A fixed-width hint label. Small enough to live inline.
pub type Label = SmolStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    IndexOutOfRange { index: usize, width: usize, capacity: usize },
    CharOutsideAlphabet { ch: char },
}

impl std::fmt::Display for LabelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, width, capacity } => {
                write!(f, "index {index} not representable at width {width} (capacity {capacity})")
            }
            Self::CharOutsideAlphabet { ch } => {
                write!(f, "character '{ch}' is not in the hint alphabet")
            }
        }
    }
}

impl std::error::Error for LabelError {}

fn pow_saturating(base: usize, exp: usize) -> usize {
    let mut acc = 1usize;
    for _ in 0..exp {
        acc = acc.saturating_mul(base);
    }
    acc
}

/// Minimum label width able to address `count` candidates.
///
/// Returns `1` for fewer than two candidates (a zero-candidate session is
/// never opened, but the function must stay total); otherwise the smallest
/// `w` with `|alphabet|^w >= count`.
pub fn label_width(count: usize, alphabet: &Alphabet) -> usize {
    if count < 2 {
        return 1;
    }

    let radix = alphabet.len();
    let mut width = 1;
    let mut capacity = radix;
    while capacity < count {
        width += 1;
        capacity = capacity.saturating_mul(radix);
    }
    width
}

// Digit loop shared by `index_to_label` and `labels_for`; callers guarantee
// `index < alphabet.len()^width`.
fn encode(index: usize, width: usize, alphabet: &Alphabet) -> Label {
    let radix = alphabet.len();
    let mut chars: SmallVec<[char; 8]> = smallvec![alphabet.pad_char(); width];
    let mut rest = index;
    for pos in (0..width).rev() {
        chars[pos] = alphabet.char_at(rest % radix);
        rest /= radix;
    }
    chars.into_iter().collect()
}

/// Label for a candidate index at a fixed width.
pub fn index_to_label(
    index: usize,
    width: usize,
    alphabet: &Alphabet,
) -> Result<Label, LabelError> {
    let capacity = pow_saturating(alphabet.len(), width);
    if index >= capacity {
        return Err(LabelError::IndexOutOfRange { index, width, capacity });
    }
    Ok(encode(index, width, alphabet))
}

/// Candidate index for a label; inverse of [`index_to_label`].
///
/// Callers that feed user keystrokes through this must treat the error as
/// "no match", not a crash.
pub fn label_to_index(label: &str, alphabet: &Alphabet) -> Result<usize, LabelError> {
    let radix = alphabet.len();
    let mut index = 0usize;
    for ch in label.chars() {
        let digit = alphabet.digit_of(ch).ok_or(LabelError::CharOutsideAlphabet { ch })?;
        index = index.saturating_mul(radix).saturating_add(digit);
    }
    Ok(index)
}

/// Width plus the first `count` labels in index order.
pub fn labels_for(count: usize, alphabet: &Alphabet) -> (usize, Vec<Label>) {
    let width = label_width(count, alphabet);
    let labels = (0..count).map(|index| encode(index, width, alphabet)).collect();
    (width, labels)
}
