//! Manifest loading with demo fallback.
//!
//! A site without published manifests still renders: missing or empty
//! manifests are [`ManifestLoad::Unconfigured`], unreadable or malformed ones
//! are [`ManifestLoad::Failed`]. Both fall back to the demo data, but only a
//! failure is logged.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    dashboard::Dashboard,
    demo,
    item::{Lab, Paper},
};

/// Curriculum manifest file name inside the data directory.
pub const CURRICULUM_MANIFEST: &str = "curriculum.json";

/// Lab manifest file name inside the data directory.
pub const LABS_MANIFEST: &str = "labs.json";

/// Dashboard manifest file name inside the data directory.
pub const DASHBOARD_MANIFEST: &str = "manifest.json";

/// Manifest could not be used.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// File exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Manifest path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// File is not valid JSON of the expected shape.
    #[error("malformed manifest {}: {reason}", path.display())]
    Malformed {
        /// Manifest path.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

/// Outcome of reading one manifest.
#[derive(Debug)]
pub enum ManifestLoad<T> {
    /// Manifest present and usable.
    Loaded(T),
    /// No manifest published yet.
    Unconfigured,
    /// Manifest present but unusable.
    Failed(ManifestError),
}

impl<T> ManifestLoad<T> {
    /// Resolve to a value, using `demo` unless the manifest loaded.
    pub fn or_demo(self, demo: impl FnOnce() -> T) -> Sourced<T> {
        match self {
            Self::Loaded(value) => Sourced { value, source: Source::Manifest },
            Self::Unconfigured => Sourced { value: demo(), source: Source::Demo },
            Self::Failed(error) => {
                tracing::warn!(%error, "manifest unusable, falling back to demo data");
                Sourced { value: demo(), source: Source::Fallback(error) }
            },
        }
    }
}

/// Where a piece of content came from.
#[derive(Debug)]
pub enum Source {
    /// Published manifest.
    Manifest,
    /// Demo data; no manifest published.
    Demo,
    /// Demo data; the manifest failed to load.
    Fallback(ManifestError),
}

/// A value and its [`Source`].
#[derive(Debug)]
pub struct Sourced<T> {
    /// Content to render.
    pub value: T,
    /// Where `value` came from.
    pub source: Source,
}

fn read(path: &Path) -> Result<Option<String>, ManifestError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ManifestError::Io { path: path.to_path_buf(), source }),
    }
}

fn malformed(path: &Path, error: &serde_json::Error) -> ManifestError {
    ManifestError::Malformed { path: path.to_path_buf(), reason: error.to_string() }
}

/// Read a JSON array manifest. An empty array counts as unconfigured.
pub fn load_list<T: DeserializeOwned>(path: &Path) -> ManifestLoad<Vec<T>> {
    let text = match read(path) {
        Ok(Some(text)) => text,
        Ok(None) => return ManifestLoad::Unconfigured,
        Err(e) => return ManifestLoad::Failed(e),
    };

    match serde_json::from_str::<Vec<T>>(&text) {
        Ok(items) if items.is_empty() => ManifestLoad::Unconfigured,
        Ok(items) => ManifestLoad::Loaded(items),
        Err(e) => ManifestLoad::Failed(malformed(path, &e)),
    }
}

/// Read the dashboard manifest. A manifest without `metrics` counts as
/// unconfigured.
pub fn load_dashboard(path: &Path) -> ManifestLoad<Dashboard> {
    let text = match read(path) {
        Ok(Some(text)) => text,
        Ok(None) => return ManifestLoad::Unconfigured,
        Err(e) => return ManifestLoad::Failed(e),
    };

    let value: serde_json::Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => return ManifestLoad::Failed(malformed(path, &e)),
    };

    if value.get("metrics").is_none_or(serde_json::Value::is_null) {
        return ManifestLoad::Unconfigured;
    }

    match serde_json::from_value(value) {
        Ok(dashboard) => ManifestLoad::Loaded(dashboard),
        Err(e) => ManifestLoad::Failed(malformed(path, &e)),
    }
}

/// All site content, resolved against a data directory.
#[derive(Debug)]
pub struct Catalog {
    /// Curriculum papers.
    pub papers: Sourced<Vec<Paper>>,
    /// Lab archive.
    pub labs: Sourced<Vec<Lab>>,
    /// Dashboard.
    pub dashboard: Sourced<Dashboard>,
}

impl Catalog {
    /// Load every manifest under `data_dir`, falling back to demo data.
    pub fn load(data_dir: &Path) -> Self {
        Self {
            papers: load_list(&data_dir.join(CURRICULUM_MANIFEST)).or_demo(demo::papers),
            labs: load_list(&data_dir.join(LABS_MANIFEST)).or_demo(demo::labs),
            dashboard: load_dashboard(&data_dir.join(DASHBOARD_MANIFEST)).or_demo(demo::dashboard),
        }
    }

    /// Demo content only.
    pub fn demo() -> Self {
        Self {
            papers: Sourced { value: demo::papers(), source: Source::Demo },
            labs: Sourced { value: demo::labs(), source: Source::Demo },
            dashboard: Sourced { value: demo::dashboard(), source: Source::Demo },
        }
    }
}
