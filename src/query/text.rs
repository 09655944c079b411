// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::model::{Candidate, CandidateSet};

/// A parsed text query.
///
/// The digit characters of the query form a 1-based selection number; the
/// remaining characters split into whitespace-separated word patterns, each a
/// case-insensitive regex. A candidate matches when every word pattern
/// matches its visible text.
#[derive(Debug, Clone)]
pub struct TextFilter {
    words: Vec<Regex>,
    number: Option<usize>,
}

impl TextFilter {
    pub fn parse(query: &str) -> Result<Self, TextFilterError> {
        let digits: String = query.chars().filter(char::is_ascii_digit).collect();
        let number = digits.parse::<usize>().ok();

        let stripped: String = query.chars().filter(|ch| !ch.is_ascii_digit()).collect();
        let mut words = Vec::new();
        for word in stripped.split_whitespace() {
            let regex = RegexBuilder::new(word)
                .case_insensitive(true)
                .build()
                .map_err(|source| TextFilterError::BadWordPattern {
                    word: word.to_owned(),
                    source,
                })?;
            words.push(regex);
        }

        Ok(Self { words, number })
    }

    /// The selection number, when the query contained digits.
    pub fn number(&self) -> Option<usize> {
        self.number
    }

    /// True when every word pattern matches the candidate's visible text.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.words.iter().all(|word| word.is_match(candidate.text()))
    }

    pub fn filter(&self, candidates: &CandidateSet) -> CandidateSet {
        candidates.iter().filter(|candidate| self.matches(candidate)).cloned().collect()
    }

    /// The candidate the query selects: the `number`th match (1-based), or
    /// the first match when the query has no usable number.
    pub fn select<'a>(&self, candidates: &'a CandidateSet) -> Option<&'a Candidate> {
        let mut matches = candidates.iter().filter(|candidate| self.matches(candidate));
        match self.number {
            Some(number) if number >= 1 => matches.nth(number - 1),
            _ => matches.next(),
        }
    }
}

#[derive(Debug)]
pub enum TextFilterError {
    BadWordPattern { word: String, source: regex::Error },
}

impl fmt::Display for TextFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadWordPattern { word, source } => {
                write!(f, "bad word pattern '{word}': {source}")
            }
        }
    }
}

impl std::error::Error for TextFilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadWordPattern { source, .. } => Some(source),
        }
    }
}
