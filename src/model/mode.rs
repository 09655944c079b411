// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// What the caller intends to do with a resolution.
///
/// The mode never changes how labels are computed or matched; it only travels
/// with the session so the resolution can be turned into the right follow
/// event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FollowMode {
    /// Activate the element in place.
    #[default]
    Click,
    /// Open the element's URI in a new window.
    NewWindow,
    /// Hand the element's URI back without activating anything.
    ReturnUri,
}

impl fmt::Display for FollowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Click => "click",
            Self::NewWindow => "newwindow",
            Self::ReturnUri => "returnuri",
        };
        f.write_str(name)
    }
}

impl FromStr for FollowMode {
    type Err = FollowModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "click" => Ok(Self::Click),
            "newwindow" => Ok(Self::NewWindow),
            "returnuri" => Ok(Self::ReturnUri),
            _ => Err(FollowModeParseError { value: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowModeParseError {
    value: String,
}

impl fmt::Display for FollowModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown follow mode '{}' (expected click, newwindow, or returnuri)",
            self.value
        )
    }
}

impl std::error::Error for FollowModeParseError {}
