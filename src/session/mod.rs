// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interactive hint sessions.
//!
//! One session owns one hinting interaction from open to resolution: it
//! labels the candidate set, narrows it as the user types, and reports the
//! outcome. Sessions are plain values with no shared state; independent
//! sessions never collide.
//!
//! Matching always filters the original labeled set against the full
//! accumulated prefix, so a shorter prefix (backspace) widens the match
//! again. A keystroke outside the alphabet is absorbed without effect;
//! allocator errors never escape `update`.

use smol_str::SmolStr;

use crate::label::{self, Label};
use crate::model::{Alphabet, Candidate, CandidateId, CandidateSet, FollowMode};

/// Lifecycle of one session.
///
/// `Active` is the only state that loops; every other state is terminal. The
/// pre-open "empty" condition has no representation here: a caller that has
/// not opened a session simply holds none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Resolved,
    Cancelled,
    NoMatch,
}

/// One labeled candidate as the caller should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintItem {
    pub candidate_id: CandidateId,
    pub full_label: Label,
    /// The characters the user still has to type; render this, not the full
    /// label.
    pub residual: Label,
}

/// The render state of an open session: surviving candidates in label order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionView {
    pub items: Vec<HintItem>,
}

impl SessionView {
    /// Delivers every hint to `attach`, skipping items whose delivery fails.
    ///
    /// One bad candidate must not abort the whole render; failures are
    /// reported per candidate so the caller can log or retry them.
    pub fn attach<E>(
        &self,
        mut attach: impl FnMut(&HintItem) -> Result<(), E>,
    ) -> AttachReport<E> {
        let mut report = AttachReport { attached: 0, failed: Vec::new() };
        for item in &self.items {
            match attach(item) {
                Ok(()) => report.attached += 1,
                Err(err) => report.failed.push((item.candidate_id.clone(), err)),
            }
        }
        report
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachReport<E> {
    pub attached: usize,
    pub failed: Vec<(CandidateId, E)>,
}

/// A session's terminal answer: the single chosen candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub candidate: Candidate,
    pub mode: FollowMode,
}

/// What one `update` call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// More than one candidate still matches; re-render the view.
    Open(SessionView),
    /// Exactly one candidate matched; the session is finished.
    Resolved(Resolution),
    /// Nothing matches; the caller should clear its hints.
    NoMatch,
}

/// One hinting interaction: candidate set, labels, typed prefix, mode.
#[derive(Debug, Clone)]
pub struct HintSession {
    alphabet: Alphabet,
    mode: FollowMode,
    width: usize,
    candidates: CandidateSet,
    labels: Vec<Label>,
    typed: String,
    state: SessionState,
    resolved: Option<usize>,
}

impl HintSession {
    /// Opens a session over `candidates`, labeling the in-viewport ones in
    /// their original order.
    ///
    /// Zero visible candidates put the session directly into
    /// [`SessionState::NoMatch`]; no width or labels are computed that the
    /// caller could misuse.
    pub fn open(candidates: CandidateSet, alphabet: Alphabet, mode: FollowMode) -> Self {
        let visible: CandidateSet =
            candidates.iter().filter(|candidate| candidate.in_viewport()).cloned().collect();
        let (width, labels) = label::labels_for(visible.len(), &alphabet);
        let state =
            if visible.is_empty() { SessionState::NoMatch } else { SessionState::Active };

        Self {
            alphabet,
            mode,
            width,
            candidates: visible,
            labels,
            typed: String::new(),
            state,
            resolved: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mode(&self) -> FollowMode {
        self.mode
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Fixed label width for this session.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The accumulated prefix the session has accepted so far.
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// The labeled (viewport-filtered) candidate set, in label order.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Re-filters against `typed` and steps the state machine.
    ///
    /// `typed` is the full accumulated input, not a delta; the caller sends a
    /// shorter string after backspace. Input containing a character outside
    /// the alphabet is ignored wholesale: the previous prefix and view are
    /// kept so a dangling keystroke stays absorbable. A valid prefix that no
    /// label starts with ends the session in `NoMatch`; a prefix exactly one
    /// label starts with resolves immediately, even when label characters
    /// remain untyped.
    pub fn update(&mut self, typed: &str) -> UpdateOutcome {
        match self.state {
            SessionState::Active => {}
            SessionState::Resolved => return self.resolved_outcome(),
            SessionState::Cancelled | SessionState::NoMatch => return UpdateOutcome::NoMatch,
        }

        if typed.chars().any(|ch| !self.alphabet.contains(ch)) {
            return UpdateOutcome::Open(self.view());
        }

        self.typed.clear();
        self.typed.push_str(typed);

        let survivors = self.survivor_indices();
        match survivors.as_slice() {
            [] => {
                self.state = SessionState::NoMatch;
                UpdateOutcome::NoMatch
            }
            [index] => {
                self.state = SessionState::Resolved;
                self.resolved = Some(*index);
                self.resolved_outcome()
            }
            _ => UpdateOutcome::Open(self.view()),
        }
    }

    /// Ends the session unconditionally. Idempotent; the caller clears any
    /// rendered hints.
    pub fn cancel(&mut self) {
        self.state = SessionState::Cancelled;
    }

    /// The view for the current prefix; empty in every non-`Active` state.
    pub fn view(&self) -> SessionView {
        if self.state != SessionState::Active {
            return SessionView::default();
        }

        let items = self
            .survivor_indices()
            .into_iter()
            .filter_map(|index| {
                let candidate = self.candidates.get(index)?;
                let full_label = self.labels.get(index)?.clone();
                // Survivors start with `typed`, so byte-slicing at its length
                // lands on a char boundary.
                let residual = SmolStr::new(&full_label[self.typed.len()..]);
                Some(HintItem {
                    candidate_id: candidate.candidate_id().clone(),
                    full_label,
                    residual,
                })
            })
            .collect();

        SessionView { items }
    }

    /// The resolution, once the session reached [`SessionState::Resolved`].
    pub fn resolution(&self) -> Option<Resolution> {
        if self.state != SessionState::Resolved {
            return None;
        }
        let candidate = self.resolved.and_then(|index| self.candidates.get(index))?;
        Some(Resolution { candidate: candidate.clone(), mode: self.mode })
    }

    fn resolved_outcome(&self) -> UpdateOutcome {
        match self.resolution() {
            Some(resolution) => UpdateOutcome::Resolved(resolution),
            None => UpdateOutcome::NoMatch,
        }
    }

    fn survivor_indices(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| label.starts_with(self.typed.as_str()))
            .map(|(index, _)| index)
            .collect()
    }
}
