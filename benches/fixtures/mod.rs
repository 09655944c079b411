// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::str::FromStr;

use thalassa::model::{Alphabet, Candidate, CandidateClass, CandidateId, CandidateSet};

pub fn digits() -> Alphabet {
    Alphabet::from_str("0123456789").expect("alphabet")
}

pub fn home_row() -> Alphabet {
    Alphabet::from_str("arstdhneio").expect("alphabet")
}

/// A page-like candidate set: mostly links, a sprinkling of form fields.
pub fn candidates(count: usize) -> CandidateSet {
    (0..count)
        .map(|idx| {
            let class = match idx % 7 {
                5 => CandidateClass::TextInput,
                6 => CandidateClass::Selectable,
                _ => CandidateClass::Clickable,
            };
            let id = CandidateId::new(format!("bench:{idx:04}")).expect("candidate id");
            let mut candidate =
                Candidate::new(id, class).with_text(format!("Bench element {idx:04}"));
            if matches!(class, CandidateClass::Clickable) {
                candidate = candidate.with_uri(format!("https://bench.example.net/{idx:04}"));
            }
            candidate
        })
        .collect()
}
