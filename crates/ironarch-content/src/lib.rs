//! Site content for Iron Architect.
//!
//! Curriculum papers, labs and the dashboard, loaded from JSON manifests (or
//! demo data when none are published), narrowed by filter buttons and
//! rendered to HTML fragments. Renderers take a
//! [`ContentVisibility`](ironarch_core::ContentVisibility) and never see the
//! gate itself.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod dashboard;
pub mod demo;
pub mod filter;
pub mod item;
pub mod manifest;
pub mod render;
pub mod views;

pub use dashboard::Dashboard;
pub use filter::{Filter, Filterable};
pub use item::{Difficulty, Lab, Paper, PaperKind, PaperStatus};
pub use manifest::{Catalog, ManifestError, ManifestLoad, Source, Sourced};
pub use views::{LiveView, Page, PageContent, ViewHandle};
