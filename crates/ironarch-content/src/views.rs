//! Pages that re-render whenever the gate changes mode.

use std::{
    fmt,
    str::FromStr,
    sync::{Arc, Mutex, PoisonError},
};

use ironarch_core::{ContentVisibility, GateListener};

use crate::{
    dashboard::Dashboard,
    filter::Filter,
    item::{Lab, Paper},
    render,
};

/// Renderable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Curriculum table.
    Curriculum,
    /// Lab grid.
    Labs,
    /// Dashboard panels.
    Dashboard,
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "curriculum" => Ok(Self::Curriculum),
            "labs" => Ok(Self::Labs),
            "dashboard" => Ok(Self::Dashboard),
            other => Err(format!("unknown page '{other}'")),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Curriculum => "curriculum",
            Self::Labs => "labs",
            Self::Dashboard => "dashboard",
        })
    }
}

/// Content a page renders from.
#[derive(Debug, Clone)]
pub enum PageContent {
    /// Papers for the curriculum table.
    Curriculum(Vec<Paper>),
    /// Labs for the lab grid.
    Labs(Vec<Lab>),
    /// Dashboard data.
    Dashboard(Box<Dashboard>),
}

impl PageContent {
    /// Which page this content belongs to.
    pub const fn page(&self) -> Page {
        match self {
            Self::Curriculum(_) => Page::Curriculum,
            Self::Labs(_) => Page::Labs,
            Self::Dashboard(_) => Page::Dashboard,
        }
    }

    /// Render with the given filter and visibility.
    pub fn render(&self, filter: &Filter, visibility: ContentVisibility) -> String {
        match self {
            Self::Curriculum(papers) => render::render_curriculum(papers, filter, visibility),
            Self::Labs(labs) => render::render_labs(labs, filter, visibility),
            Self::Dashboard(dashboard) => render::render_dashboard(dashboard, visibility),
        }
    }
}

/// Shared handle to the latest rendered HTML.
#[derive(Debug, Clone, Default)]
pub struct ViewHandle(Arc<Mutex<String>>);

impl ViewHandle {
    /// Latest HTML.
    pub fn html(&self) -> String {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn replace(&self, html: String) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = html;
    }
}

/// A page bound to a filter that re-renders on every mode change.
#[derive(Debug)]
pub struct LiveView {
    content: PageContent,
    filter: Filter,
    visibility: ContentVisibility,
    output: ViewHandle,
}

impl LiveView {
    /// Render `content` once with `visibility` and return the view plus a
    /// handle to its output.
    pub fn new(
        content: PageContent,
        filter: Filter,
        visibility: ContentVisibility,
    ) -> (Self, ViewHandle) {
        let output = ViewHandle::default();
        let view = Self { content, filter, visibility, output: output.clone() };
        view.refresh();
        (view, output)
    }

    /// Switch filter and re-render.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.refresh();
    }

    /// Visibility used for the latest render.
    pub const fn visibility(&self) -> ContentVisibility {
        self.visibility
    }

    fn refresh(&self) {
        self.output.replace(self.content.render(&self.filter, self.visibility));
    }
}

impl GateListener for LiveView {
    fn on_mode_changed(&mut self, visibility: ContentVisibility) {
        tracing::debug!(page = %self.content.page(), mode = visibility.mode().label(), "re-rendering");
        self.visibility = visibility;
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use ironarch_core::Mode;

    use super::*;
    use crate::demo;

    #[test]
    fn page_names_parse() {
        assert_eq!("labs".parse::<Page>(), Ok(Page::Labs));
        assert!("home".parse::<Page>().is_err());
        assert_eq!(Page::Dashboard.to_string(), "dashboard");
    }

    #[test]
    fn mode_change_rerenders() {
        let (mut view, handle) = LiveView::new(
            PageContent::Labs(demo::labs()),
            Filter::All,
            ContentVisibility::public(),
        );
        assert!(!handle.html().contains("Buffer Overflow Exploit"));

        view.on_mode_changed(ContentVisibility::for_mode(Mode::Owner));
        assert!(handle.html().contains("Buffer Overflow Exploit"));

        view.on_mode_changed(ContentVisibility::public());
        assert!(!handle.html().contains("Buffer Overflow Exploit"));
    }

    #[test]
    fn filter_change_rerenders() {
        let (mut view, handle) = LiveView::new(
            PageContent::Curriculum(demo::papers()),
            Filter::All,
            ContentVisibility::public(),
        );

        view.set_filter(Filter::from("AAI"));

        assert!(!handle.html().contains("CSC-1-1"));
        assert!(handle.html().contains("AAI-1-1"));
    }
}
