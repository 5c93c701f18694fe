//! Curriculum papers and lab entries.

use std::fmt;

use ironarch_core::{Visibility, Visible};
use serde::{Deserialize, Serialize};

/// Progress on a paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperStatus {
    /// Finished and understood.
    Mastered,
    /// Being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Not yet begun.
    #[serde(rename = "Not Started")]
    NotStarted,
}

impl PaperStatus {
    /// Wire and display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mastered => "Mastered",
            Self::InProgress => "In Progress",
            Self::NotStarted => "Not Started",
        }
    }

    /// CSS-friendly slug.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mastered => "mastered",
            Self::InProgress => "in-progress",
            Self::NotStarted => "not-started",
        }
    }
}

impl fmt::Display for PaperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Theory or practical paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperKind {
    /// Theory paper (`TH`).
    #[serde(rename = "TH")]
    Theory,
    /// Practical paper (`PR`).
    #[serde(rename = "PR")]
    Practical,
}

impl PaperKind {
    /// Two-letter wire code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Theory => "TH",
            Self::Practical => "PR",
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Theory => "Theory",
            Self::Practical => "Practical",
        }
    }
}

/// Lab difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Introductory.
    Beginner,
    /// Some background needed.
    Intermediate,
    /// Significant background needed.
    Advanced,
}

impl Difficulty {
    /// Wire and display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// CSS-friendly slug.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One curriculum paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper code, e.g. `CSC-1-1`.
    pub code: String,
    /// Paper title.
    pub title: String,
    /// Track, e.g. `CSC` or `AAI`.
    pub track: String,
    /// Theory or practical.
    #[serde(rename = "type")]
    pub kind: PaperKind,
    /// Semester number.
    pub semester: u32,
    /// Progress.
    pub status: PaperStatus,
    /// Who may see this paper.
    #[serde(default)]
    pub visibility: Visibility,
}

impl Visible for Paper {
    fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// One lab entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    /// Lab code, e.g. `CSC-1-1-PR`.
    pub code: String,
    /// Lab title.
    pub title: String,
    /// Difficulty rating.
    pub difficulty: Difficulty,
    /// Track, e.g. `CSC` or `AAI`.
    pub track: String,
    /// Semester number.
    pub semester: u32,
    /// Short description.
    pub description: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Who may see this lab.
    #[serde(default)]
    pub visibility: Visibility,
}

impl Visible for Lab {
    fn visibility(&self) -> Visibility {
        self.visibility
    }
}
