// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core vocabulary shared by the label allocator and hint sessions.
//!
//! Candidates arrive from an external discovery layer as an ordered, opaque
//! list; the alphabet and follow mode arrive from configuration.

pub mod alphabet;
pub mod candidate;
pub mod mode;

pub use alphabet::{Alphabet, AlphabetError};
pub use candidate::{Candidate, CandidateClass, CandidateId, CandidateIdError, CandidateSet};
pub use mode::{FollowMode, FollowModeParseError};
