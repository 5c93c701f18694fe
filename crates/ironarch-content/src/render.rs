//! HTML fragments for the curriculum table, lab grid and dashboard.
//!
//! Every renderer takes a [`ContentVisibility`] and skips items it does not
//! admit. All manifest text is escaped; paper codes in links are
//! percent-encoded.

use std::fmt::Write as _;

use ironarch_core::ContentVisibility;

use crate::{
    dashboard::{Certification, CurriculumPanel, Dashboard, ResearchItem, Semester},
    filter::Filter,
    item::{Difficulty, Lab, Paper, PaperStatus},
};

/// Placeholder row when no paper passes the filter.
pub const NO_PAPERS: &str = "<tr><td colspan=\"6\" style=\"color:var(--text-dim);padding:20px;\
                             text-align:center;\">No papers match this filter.</td></tr>";

/// Placeholder paragraph when no lab passes the filter.
pub const NO_LABS: &str =
    "<p style=\"color:var(--text-dim);padding:20px;\">No labs match this filter.</p>";

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn paper_href(code: &str) -> String {
    format!("paper.html?code={}", urlencoding::encode(code))
}

/// Status badge span.
pub fn status_badge(status: PaperStatus) -> String {
    format!("<span class=\"badge status-{}\">{}</span>", status.slug(), status.label())
}

/// Difficulty badge span.
pub fn difficulty_badge(difficulty: Difficulty) -> String {
    format!(
        "<span class=\"badge difficulty-{}\">{}</span>",
        difficulty.slug(),
        difficulty.label()
    )
}

fn curriculum_row(out: &mut String, paper: &Paper) {
    let code = escape_html(&paper.code);
    let href = paper_href(&paper.code);
    let track = escape_html(&paper.track);

    let _ = write!(
        out,
        "<tr data-track=\"{track}\" data-type=\"{kind}\" data-status=\"{status}\">\
         <td class=\"code-cell\"><a href=\"{href}\">{code}</a></td>\
         <td><a href=\"{href}\">{title}</a></td>\
         <td>{track}</td>\
         <td>{label}</td>\
         <td>Semester {semester}</td>\
         <td>{badge}</td>\
         </tr>",
        kind = paper.kind.code(),
        status = paper.status.label(),
        title = escape_html(&paper.title),
        label = paper.kind.label(),
        semester = paper.semester,
        badge = status_badge(paper.status),
    );
}

/// Table body rows for the curriculum page.
pub fn render_curriculum(papers: &[Paper], filter: &Filter, visibility: ContentVisibility) -> String {
    let mut out = String::new();
    for paper in filter.apply(papers).into_iter().filter(|p| visibility.is_visible(*p)) {
        curriculum_row(&mut out, paper);
    }
    if out.is_empty() { NO_PAPERS.to_string() } else { out }
}

fn lab_card(out: &mut String, lab: &Lab) {
    let tags: String = lab
        .tags
        .iter()
        .map(|tag| format!("<span class=\"tag\">{}</span>", escape_html(tag)))
        .collect();

    let _ = write!(
        out,
        "<div class=\"lab-card\" data-track=\"{track}\" data-difficulty=\"{difficulty}\">\
         <div class=\"lab-card-header\">\
         <span class=\"lab-code\">{code}</span>\
         <span class=\"lab-title\">{title}</span>\
         {badge}\
         </div>\
         <p class=\"lab-desc\">{description}</p>\
         <div class=\"lab-tags\">{tags}</div>\
         </div>",
        track = escape_html(&lab.track),
        difficulty = lab.difficulty.label(),
        code = escape_html(&lab.code),
        title = escape_html(&lab.title),
        badge = difficulty_badge(lab.difficulty),
        description = escape_html(&lab.description),
    );
}

/// Card grid for the labs page.
pub fn render_labs(labs: &[Lab], filter: &Filter, visibility: ContentVisibility) -> String {
    let mut out = String::new();
    for lab in filter.apply(labs).into_iter().filter(|l| visibility.is_visible(*l)) {
        lab_card(&mut out, lab);
    }
    if out.is_empty() { NO_LABS.to_string() } else { out }
}

fn panel(out: &mut String, id: &str, panel: &CurriculumPanel) {
    let progress = panel.progress_percent();
    let _ = write!(
        out,
        "<section class=\"panel\" id=\"{id}\">\
         <p id=\"{id}-pct\">Progress: {progress}%</p>\
         <div role=\"progressbar\" aria-valuemin=\"0\" aria-valuemax=\"100\" \
         aria-valuenow=\"{progress}\">\
         <div id=\"{id}-bar\" style=\"width:{progress}%\"></div></div>\
         <ul id=\"{id}-papers\">"
    );
    for paper in &panel.papers {
        let _ = write!(
            out,
            "<li class=\"paper-item\"><span><span class=\"paper-code\">{code}:</span> \
             <a href=\"{href}\">{title}</a></span>{badge}</li>",
            code = escape_html(&paper.code),
            href = paper_href(&paper.code),
            title = escape_html(&paper.title),
            badge = status_badge(paper.status),
        );
    }
    out.push_str("</ul></section>");
}

fn timeline(out: &mut String, semester: &Semester) {
    let _ = write!(
        out,
        "<section class=\"panel\" id=\"semester\"><h2>Semester {} ({})</h2><div id=\"sem-timeline\">",
        semester.current,
        escape_html(&semester.name)
    );
    for item in &semester.timeline {
        let (class, dot) = if item.current {
            (
                " current",
                "<span class=\"timeline-dot\" aria-label=\"Current position\"></span>",
            )
        } else {
            ("", "")
        };
        let _ = write!(
            out,
            "<div class=\"timeline-item{class}\"><span class=\"tl-code\">{}:</span> {}{dot}</div>",
            escape_html(&item.code),
            escape_html(&item.title),
        );
    }
    out.push_str("</div></section>");
}

fn research_item(out: &mut String, item: &ResearchItem) {
    let _ = write!(
        out,
        "<li class=\"activity-item\"><a href=\"research.html\">{}</a>",
        escape_html(&item.title)
    );
    if !item.version.is_empty() {
        let _ = write!(out, "<span class=\"item-version\">({})</span>", escape_html(&item.version));
    }
    out.push_str("</li>");
}

fn certification(out: &mut String, cert: &Certification) {
    let check = if cert.done {
        "<span class=\"cert-status-done\" aria-label=\"Completed\">✓</span>"
    } else {
        "<span class=\"cert-check\" aria-label=\"Not completed\"></span>"
    };
    let _ = write!(
        out,
        "<li class=\"activity-item cert-item\"><span>{}</span>{check}</li>",
        escape_html(&cert.name)
    );
}

/// Dashboard panels.
///
/// The dashboard carries no per-item visibility, so `visibility` only decides
/// whether the owner-only badge is shown.
pub fn render_dashboard(dashboard: &Dashboard, visibility: ContentVisibility) -> String {
    let mut out = String::new();

    if visibility.mode().is_owner() {
        out.push_str("<p class=\"owner-note\">Owner view</p>");
    }

    let metrics = &dashboard.metrics;
    out.push_str("<dl class=\"metrics\">");
    for (key, value) in [
        ("labs", &metrics.labs),
        ("papers", &metrics.papers),
        ("tools", &metrics.tools),
        ("certs", &metrics.certs),
    ] {
        let _ = write!(
            out,
            "<dt>{key}</dt><dd data-metric=\"{key}\">{}</dd>",
            escape_html(&value.to_string())
        );
    }
    out.push_str("</dl>");

    panel(&mut out, "csc-sec", &dashboard.csc_sec);
    if let Some(core) = &dashboard.cs_core {
        panel(&mut out, "cs-core", core);
    }
    panel(&mut out, "aai", &dashboard.aai);

    timeline(&mut out, &dashboard.semester);

    out.push_str("<ul id=\"recent-labs\">");
    for lab in &dashboard.recent_labs {
        let _ = write!(
            out,
            "<li class=\"activity-item\"><a href=\"labs.html\">{}</a></li>",
            escape_html(&lab.title)
        );
    }
    out.push_str("</ul><ul id=\"recent-research\">");
    for item in &dashboard.recent_research {
        research_item(&mut out, item);
    }
    out.push_str("</ul><ul id=\"cert-list\">");
    for cert in &dashboard.certifications {
        certification(&mut out, cert);
    }
    out.push_str("</ul>");

    out
}
