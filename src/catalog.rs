// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Candidate catalogs on disk.
//!
//! Element discovery is external to the engine; for the demo binary and for
//! tests, candidate lists arrive as JSON files and validate into model types
//! on load. The on-disk entries are a deliberately separate DTO layer so the
//! file format can stay lenient (defaulted fields) while the model stays
//! strict.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{Candidate, CandidateClass, CandidateId, CandidateSet};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    candidates: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    class: CatalogClass,
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    text: String,
    #[serde(default = "default_in_viewport")]
    in_viewport: bool,
}

fn default_in_viewport() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum CatalogClass {
    TextInput,
    Selectable,
    Clickable,
}

impl From<CatalogClass> for CandidateClass {
    fn from(class: CatalogClass) -> Self {
        match class {
            CatalogClass::TextInput => Self::TextInput,
            CatalogClass::Selectable => Self::Selectable,
            CatalogClass::Clickable => Self::Clickable,
        }
    }
}

/// Loads a candidate catalog, preserving file order.
pub fn load_candidates(path: impl AsRef<Path>) -> Result<CandidateSet, CatalogError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { path: path.to_owned(), source })?;
    let file: CatalogFile = serde_json::from_str(&raw)
        .map_err(|source| CatalogError::Parse { path: path.to_owned(), source })?;

    let mut candidates = Vec::with_capacity(file.candidates.len());
    for entry in file.candidates {
        let candidate_id = CandidateId::new(&entry.id)
            .map_err(|_| CatalogError::InvalidId { path: path.to_owned(), id: entry.id })?;
        let mut candidate = Candidate::new(candidate_id, entry.class.into())
            .with_text(entry.text)
            .with_in_viewport(entry.in_viewport);
        if let Some(uri) = entry.uri {
            candidate = candidate.with_uri(uri);
        }
        candidates.push(candidate);
    }

    Ok(CandidateSet::new(candidates))
}

#[derive(Debug)]
pub enum CatalogError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    InvalidId { path: PathBuf, id: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            Self::InvalidId { path, id } => {
                write!(f, "invalid candidate id '{id}' in {}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidId { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    use rstest::{fixture, rstest};

    use crate::model::CandidateClass;

    use super::{load_candidates, CatalogError};

    static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct TempDir {
        path: std::path::PathBuf,
    }

    impl TempDir {
        fn new(prefix: &str) -> Self {
            let nanos =
                SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
            let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
            let mut path = env::temp_dir();
            path.push(format!("thalassa-{prefix}-{}-{nanos}-{counter}", std::process::id()));
            std::fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        fn path(&self) -> &std::path::Path {
            &self.path
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    #[fixture]
    fn tmp() -> TempDir {
        TempDir::new("catalog")
    }

    #[rstest]
    fn loads_entries_in_file_order(tmp: TempDir) {
        let path = tmp.path().join("candidates.json");
        std::fs::write(
            &path,
            r#"{
  "candidates": [
    { "id": "link:0", "class": "clickable", "uri": "https://example.net/", "text": "Home" },
    { "id": "input:q", "class": "text_input", "text": "Search" },
    { "id": "link:1", "class": "clickable", "in_viewport": false }
  ]
}"#,
        )
        .unwrap();

        let candidates = load_candidates(&path).unwrap();
        assert_eq!(candidates.len(), 3);

        let first = candidates.get(0).unwrap();
        assert_eq!(first.candidate_id().as_str(), "link:0");
        assert_eq!(first.class(), CandidateClass::Clickable);
        assert_eq!(first.uri(), Some("https://example.net/"));
        assert!(first.in_viewport());

        let second = candidates.get(1).unwrap();
        assert_eq!(second.class(), CandidateClass::TextInput);
        assert_eq!(second.uri(), None);

        let third = candidates.get(2).unwrap();
        assert!(!third.in_viewport());
    }

    #[rstest]
    fn rejects_empty_candidate_id(tmp: TempDir) {
        let path = tmp.path().join("candidates.json");
        std::fs::write(
            &path,
            r#"{ "candidates": [ { "id": "", "class": "clickable" } ] }"#,
        )
        .unwrap();

        let err = load_candidates(&path).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId { .. }), "got {err:?}");
    }

    #[rstest]
    fn rejects_malformed_json(tmp: TempDir) {
        let path = tmp.path().join("candidates.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_candidates(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }), "got {err:?}");
    }

    #[rstest]
    fn missing_file_is_an_io_error(tmp: TempDir) {
        let err = load_candidates(tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }), "got {err:?}");
    }
}
