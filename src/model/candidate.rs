// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::slice;
use std::str::FromStr;

use smol_str::SmolStr;

/// Stable identity of a candidate within one hinting session.
///
/// The engine never interprets the id; the discovery layer picks any scheme
/// that is unique across the flat candidate list (multi-document pages
/// included). The only requirement is that it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(SmolStr);

impl CandidateId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, CandidateIdError> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(CandidateIdError::Empty);
        }
        Ok(Self(SmolStr::new(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CandidateId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for CandidateId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for CandidateId {
    type Err = CandidateIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateIdError {
    Empty,
}

impl fmt::Display for CandidateIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("candidate id must not be empty"),
        }
    }
}

impl std::error::Error for CandidateIdError {}

/// Capability classification supplied by the discovery layer.
///
/// The engine only branches on this classification, never on concrete
/// element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateClass {
    /// Takes keyboard focus and text entry (text/file/password inputs).
    TextInput,
    /// Takes focus and a selection (text areas, option lists).
    Selectable,
    /// Anything activated by a click (links, buttons, click handlers).
    Clickable,
}

/// One followable element, as reported by the discovery layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    candidate_id: CandidateId,
    class: CandidateClass,
    uri: Option<String>,
    text: String,
    in_viewport: bool,
}

impl Candidate {
    pub fn new(candidate_id: CandidateId, class: CandidateClass) -> Self {
        Self { candidate_id, class, uri: None, text: String::new(), in_viewport: true }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_in_viewport(mut self, in_viewport: bool) -> Self {
        self.in_viewport = in_viewport;
        self
    }

    pub fn candidate_id(&self) -> &CandidateId {
        &self.candidate_id
    }

    pub fn class(&self) -> CandidateClass {
        self.class
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Visible text, used only by the text matcher; empty when the discovery
    /// layer reports none.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Viewport status as computed by the discovery layer; the engine never
    /// measures anything itself.
    pub fn in_viewport(&self) -> bool {
        self.in_viewport
    }
}

/// An ordered candidate list, fixed for the lifetime of one session.
///
/// Order is significant: it determines label assignment and must be stable
/// across re-renders within the same session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    items: Vec<Candidate>,
}

impl CandidateSet {
    pub fn new(items: Vec<Candidate>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.items.get(index)
    }

    pub fn get_by_id(&self, candidate_id: &CandidateId) -> Option<&Candidate> {
        self.items.iter().find(|candidate| candidate.candidate_id() == candidate_id)
    }

    pub fn iter(&self) -> slice::Iter<'_, Candidate> {
        self.items.iter()
    }
}

impl FromIterator<Candidate> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for CandidateSet {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Candidate, CandidateClass, CandidateId, CandidateIdError, CandidateSet};

    #[test]
    fn id_rejects_empty() {
        assert_eq!(CandidateId::new(""), Err(CandidateIdError::Empty));
    }

    #[test]
    fn builder_defaults() {
        let id = CandidateId::new("link:0").expect("candidate id");
        let candidate = Candidate::new(id.clone(), CandidateClass::Clickable);
        assert_eq!(candidate.candidate_id(), &id);
        assert_eq!(candidate.uri(), None);
        assert_eq!(candidate.text(), "");
        assert!(candidate.in_viewport());
    }

    #[test]
    fn set_preserves_order_and_finds_by_id() {
        let set: CandidateSet = ["a", "b", "c"]
            .iter()
            .map(|name| {
                Candidate::new(
                    CandidateId::new(name).expect("candidate id"),
                    CandidateClass::Clickable,
                )
            })
            .collect();

        assert_eq!(set.len(), 3);
        assert_eq!(set.get(1).map(|c| c.candidate_id().as_str()), Some("b"));
        let b_id = CandidateId::new("b").expect("candidate id");
        assert!(set.get_by_id(&b_id).is_some());
        let missing = CandidateId::new("z").expect("candidate id");
        assert!(set.get_by_id(&missing).is_none());
    }
}
