//! Dashboard manifest.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::PaperStatus;

/// Headline metric: a count or a free-form label such as `2 (Sec+, OSCP)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Plain number.
    Count(u64),
    /// Descriptive text.
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Headline metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Labs completed.
    pub labs: MetricValue,
    /// Papers taken.
    pub papers: MetricValue,
    /// Tools built.
    pub tools: MetricValue,
    /// Certifications held.
    pub certs: MetricValue,
}

/// Paper line inside a curriculum panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSummary {
    /// Paper code.
    pub code: String,
    /// Paper title.
    pub title: String,
    /// Progress.
    pub status: PaperStatus,
}

/// Progress panel for one curriculum track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumPanel {
    /// Percentage complete. Values above 100 render as 100.
    pub progress: u8,
    /// Papers in the track.
    #[serde(default)]
    pub papers: Vec<PaperSummary>,
}

impl CurriculumPanel {
    /// Progress clamped to 0..=100.
    pub fn progress_percent(&self) -> u8 {
        self.progress.min(100)
    }
}

/// Entry on the semester timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Paper code.
    pub code: String,
    /// Paper title.
    pub title: String,
    /// Whether this is where the owner currently is.
    #[serde(default)]
    pub current: bool,
}

/// Current semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester number.
    pub current: u32,
    /// Semester name.
    pub name: String,
    /// Papers in order.
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
}

/// Recently finished lab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentLab {
    /// Lab title.
    pub title: String,
}

/// Research write-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchItem {
    /// Title.
    pub title: String,
    /// Version label; empty when unversioned.
    #[serde(default)]
    pub version: String,
}

/// Certification goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Certification name.
    pub name: String,
    /// Whether it has been obtained.
    #[serde(default)]
    pub done: bool,
}

/// Everything shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Headline metrics.
    pub metrics: Metrics,
    /// Cyber security track.
    pub csc_sec: CurriculumPanel,
    /// Computer science core track, when tracked.
    #[serde(default)]
    pub cs_core: Option<CurriculumPanel>,
    /// AI track.
    pub aai: CurriculumPanel,
    /// Current semester.
    pub semester: Semester,
    /// Recently finished labs.
    #[serde(default)]
    pub recent_labs: Vec<RecentLab>,
    /// Recent research.
    #[serde(default)]
    pub recent_research: Vec<ResearchItem>,
    /// Certifications.
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn metric_accepts_number_or_text() {
        let metrics: Metrics = serde_json::from_str(
            r#"{"labs":12,"papers":7,"tools":3,"certs":"2 (Sec+, OSCP)"}"#,
        )
        .unwrap();

        assert_eq!(metrics.labs, MetricValue::Count(12));
        assert_eq!(metrics.certs.to_string(), "2 (Sec+, OSCP)");
    }

    #[test]
    fn progress_is_clamped() {
        let panel = CurriculumPanel { progress: 250, papers: vec![] };
        assert_eq!(panel.progress_percent(), 100);
    }

    #[test]
    fn dashboard_uses_camel_case_keys() {
        let dashboard: Dashboard = serde_json::from_str(
            r#"{
                "metrics": {"labs": 1, "papers": 2, "tools": 3, "certs": 0},
                "cscSec": {"progress": 10, "papers": []},
                "aai": {"progress": 5},
                "semester": {"current": 1, "name": "THE BRIDGE"},
                "recentResearch": [{"title": "Paper"}]
            }"#,
        )
        .unwrap();

        assert_eq!(dashboard.csc_sec.progress, 10);
        assert!(dashboard.cs_core.is_none());
        assert_eq!(dashboard.recent_research[0].version, "");
        assert!(dashboard.certifications.is_empty());
    }
}
