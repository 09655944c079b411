// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Follow events delivered to the embedding layer.
//!
//! The engine never touches focus, windows, or navigation itself; it names
//! the action and the caller performs it. Events serialize so embedding
//! layers that speak a textual protocol can forward them as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Candidate, CandidateClass, FollowMode};

/// What the embedding layer must do after a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "uri", rename_all = "snake_case")]
pub enum FollowEvent {
    /// A form field took focus; the caller should enter its editing mode.
    FormActive,
    /// The element was activated in place; the caller should leave hint mode.
    ResetMode,
    /// Open the URI in a new window.
    OpenWindow(String),
    /// Hand the URI back without activating anything.
    ReturnedUri(String),
}

impl fmt::Display for FollowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormActive => f.write_str("FORM_ACTIVE"),
            Self::ResetMode => f.write_str("RESET_MODE"),
            Self::OpenWindow(uri) => write!(f, "OPEN_WINDOW {uri}"),
            Self::ReturnedUri(uri) => write!(f, "RETURNED_URI {uri}"),
        }
    }
}

/// Maps a resolved candidate and the session mode to the follow event.
///
/// Returns `None` when there is nothing the caller can safely do: a URI mode
/// on a candidate without a URI, or a new-window request for a `javascript:`
/// URI.
pub fn follow_event(candidate: &Candidate, mode: FollowMode) -> Option<FollowEvent> {
    match mode {
        FollowMode::ReturnUri => {
            candidate.uri().map(|uri| FollowEvent::ReturnedUri(uri.to_owned()))
        }
        FollowMode::NewWindow => {
            let uri = candidate.uri()?;
            if uri.contains("javascript:") {
                return None;
            }
            Some(FollowEvent::OpenWindow(uri.to_owned()))
        }
        FollowMode::Click => match candidate.class() {
            CandidateClass::TextInput | CandidateClass::Selectable => {
                Some(FollowEvent::FormActive)
            }
            CandidateClass::Clickable => Some(FollowEvent::ResetMode),
        },
    }
}
