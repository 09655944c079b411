// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only matching over candidate sets.
//!
//! Label matching lives with the session; this module holds the text-query
//! side, used to narrow a candidate set by visible text before (or instead
//! of) label typing.

pub mod text;
