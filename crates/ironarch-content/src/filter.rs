//! Filter buttons.
//!
//! A filter is either `all` or a single value compared against several
//! fields at once: papers match on track, type code or status; labs match on
//! track or difficulty.

use std::{convert::Infallible, str::FromStr};

use crate::item::{Lab, Paper};

/// Active filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show everything.
    #[default]
    All,
    /// Show items with a field equal to this value.
    Value(String),
}

impl Filter {
    /// Items of `items` passing this filter, in order.
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.admits(*item)).collect()
    }

    /// Whether `item` passes this filter.
    pub fn admits<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        match self {
            Self::All => true,
            Self::Value(value) => item.matches_filter(value),
        }
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "all" { Ok(Self::All) } else { Ok(Self::Value(s.to_string())) }
    }
}

impl From<&str> for Filter {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// Items that can be narrowed by a filter button.
pub trait Filterable {
    /// Whether any filterable field equals `value`.
    fn matches_filter(&self, value: &str) -> bool;
}

impl Filterable for Paper {
    fn matches_filter(&self, value: &str) -> bool {
        self.track == value || self.kind.code() == value || self.status.label() == value
    }
}

impl Filterable for Lab {
    fn matches_filter(&self, value: &str) -> bool {
        self.track == value || self.difficulty.label() == value
    }
}

#[cfg(test)]
mod tests {
    use ironarch_core::Visibility;

    use super::*;
    use crate::item::{Difficulty, PaperKind, PaperStatus};

    fn paper(track: &str, kind: PaperKind, status: PaperStatus) -> Paper {
        Paper {
            code: format!("{track}-1-1"),
            title: "t".to_string(),
            track: track.to_string(),
            kind,
            semester: 1,
            status,
            visibility: Visibility::Public,
        }
    }

    fn lab(track: &str, difficulty: Difficulty) -> Lab {
        Lab {
            code: format!("{track}-1-1-PR"),
            title: "t".to_string(),
            difficulty,
            track: track.to_string(),
            semester: 1,
            description: String::new(),
            tags: vec![],
            visibility: Visibility::Public,
        }
    }

    #[test]
    fn all_and_blank_parse_to_all() {
        assert_eq!(Filter::from("all"), Filter::All);
        assert_eq!(Filter::from("  "), Filter::All);
        assert_eq!(Filter::from("CSC"), Filter::Value("CSC".to_string()));
    }

    #[test]
    fn papers_match_track_type_or_status() {
        let papers = [
            paper("CSC", PaperKind::Theory, PaperStatus::Mastered),
            paper("AAI", PaperKind::Practical, PaperStatus::InProgress),
            paper("AAI", PaperKind::Theory, PaperStatus::NotStarted),
        ];

        assert_eq!(Filter::from("CSC").apply(&papers).len(), 1);
        assert_eq!(Filter::from("TH").apply(&papers).len(), 2);
        assert_eq!(Filter::from("In Progress").apply(&papers).len(), 1);
        assert_eq!(Filter::All.apply(&papers).len(), 3);
        assert!(Filter::from("Advanced").apply(&papers).is_empty());
    }

    #[test]
    fn labs_match_track_or_difficulty() {
        let labs = [lab("CSC", Difficulty::Advanced), lab("AAI", Difficulty::Beginner)];

        assert_eq!(Filter::from("Advanced").apply(&labs)[0].track, "CSC");
        assert_eq!(Filter::from("AAI").apply(&labs).len(), 1);
        assert!(Filter::from("TH").apply(&labs).is_empty());
    }
}
