//! Lays the page out as terminal rows.
//!
//! Every section becomes a run of pre-wrapped lines, one row each, so the
//! row span of each section is known exactly. The spans feed the
//! intersection observer the same way element boxes feed a browser's.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::PageState;
use crate::models::{Project, SectionId, TechGroup};
use crate::services::SectionBounds;

use super::Theme;

/// Left indent of section content.
const INDENT: &str = "  ";
/// Narrowest width text is wrapped to.
const MIN_TEXT_WIDTH: usize = 20;

/// The page as rows plus the row span of each section.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// One entry per terminal row
    pub lines: Vec<Line<'static>>,
    /// Row spans in page order
    pub sections: Vec<SectionBounds>,
}

impl PageLayout {
    /// Total height in rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }

    /// Row span of a section.
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&SectionBounds> {
        self.sections.iter().find(|s| s.id == id)
    }
}

struct PageBuilder<'t> {
    theme: &'t Theme,
    width: usize,
    lines: Vec<Line<'static>>,
    sections: Vec<SectionBounds>,
    open: Option<(SectionId, usize)>,
}

impl<'t> PageBuilder<'t> {
    fn new(theme: &'t Theme, width: u16) -> Self {
        Self {
            theme,
            width: usize::from(width)
                .saturating_sub(INDENT.len() * 2)
                .max(MIN_TEXT_WIDTH),
            lines: Vec::new(),
            sections: Vec::new(),
            open: None,
        }
    }

    fn begin(&mut self, id: SectionId) {
        self.end();
        self.open = Some((id, self.lines.len()));
    }

    fn end(&mut self) {
        if let Some((id, start)) = self.open.take() {
            self.sections.push(SectionBounds {
                id,
                top: to_row(start),
                height: to_row(self.lines.len() - start),
            });
        }
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, text: &str) {
        let style = Style::default()
            .fg(self.theme.primary)
            .add_modifier(Modifier::BOLD);
        self.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(text.to_string(), style),
        ]));
        self.blank();
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        for row in wrap_text(text, self.width) {
            self.push(Line::from(vec![Span::raw(INDENT), Span::styled(row, style)]));
        }
    }

    fn finish(mut self) -> PageLayout {
        self.end();
        PageLayout {
            lines: self.lines,
            sections: self.sections,
        }
    }
}

fn to_row(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Greedy word wrap. Words longer than `width` get a row of their own.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Builds the page for the current state at the given terminal width.
#[must_use]
pub fn build_page(state: &PageState, theme: &Theme, width: u16) -> PageLayout {
    let catalog = state.catalog();
    let profile = &catalog.profile;
    let mut page = PageBuilder::new(theme, width);

    page.begin(SectionId::About);
    page.blank();
    page.paragraph(&profile.greeting, Style::default().fg(theme.accent));
    page.paragraph(
        &profile.headline,
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    );
    page.blank();
    page.paragraph(&profile.intro, Style::default().fg(theme.text_secondary));
    page.blank();
    page.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!(" {} ", profile.hero_chip),
            Style::default().fg(theme.text).bg(theme.surface),
        ),
    ]));
    page.blank();
    page.blank();

    page.begin(SectionId::Tech);
    page.heading("Technologies I use and love");
    for group in &catalog.technology_groups {
        push_tech_group(&mut page, group);
    }

    page.begin(SectionId::Projects);
    page.heading("Projects");
    push_controls(&mut page, state);
    let mut any = false;
    for project in state.visible_projects() {
        push_card(&mut page, project);
        any = true;
    }
    if !any {
        page.paragraph(
            "No projects match the selected filters.",
            Style::default().fg(theme.text_muted),
        );
        page.blank();
    }
    page.blank();

    page.begin(SectionId::Contact);
    page.heading("Contact me");
    page.paragraph(&profile.contact_copy, Style::default().fg(theme.text_secondary));
    page.paragraph(
        &profile.contact_email,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    );
    page.blank();
    page.blank();

    page.begin(SectionId::Blog);
    page.heading("Latest blog articles");
    for post in &catalog.blog_posts {
        page.paragraph(&post.display_date(), Style::default().fg(theme.text_muted));
        page.paragraph(&post.title, Style::default().fg(theme.text));
        page.blank();
    }

    page.finish()
}

fn push_tech_group(page: &mut PageBuilder<'_>, group: &TechGroup) {
    let theme = page.theme;
    page.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            group.name.label(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let mut spans: Vec<Span<'static>> = vec![Span::raw(INDENT)];
    let mut used = 0;
    for tech in &group.items {
        let chip = format!(" ● {} ", tech.name);
        let chip_len = chip.chars().count();
        if used > 0 && used + 1 + chip_len > page.width {
            page.push(Line::from(std::mem::replace(
                &mut spans,
                vec![Span::raw(INDENT)],
            )));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(
            chip,
            Style::default()
                .fg(theme.chip_foreground(tech.brand))
                .bg(theme.chip_background(&tech.tone)),
        ));
        used += chip_len;
    }
    if used > 0 {
        page.push(Line::from(spans));
    }
    page.blank();
}

fn push_controls(page: &mut PageBuilder<'_>, state: &PageState) {
    let theme = page.theme;
    let filter = state.filter();
    let label = Style::default().fg(theme.text_secondary);
    let value = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);

    page.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled("Sort by ", label),
        Span::styled(format!("[{}]", filter.sort_by.label()), value),
        Span::styled("   Category ", label),
        Span::styled(format!("[{}]", filter.category), value),
        Span::styled("   Technology ", label),
        Span::styled(format!("[{}]", filter.technology), value),
    ]));
    page.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!(
                "{} of {} projects",
                state.visible_count(),
                state.catalog().projects.len()
            ),
            Style::default().fg(theme.text_muted),
        ),
    ]));
    page.blank();
}

fn push_card(page: &mut PageBuilder<'_>, project: &Project) {
    let theme = page.theme;
    page.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled("▌ ", Style::default().fg(theme.accent)),
        Span::styled(
            project.category.label().to_uppercase(),
            Style::default().fg(theme.accent),
        ),
    ]));
    page.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled("▌ ", Style::default().fg(theme.accent)),
        Span::styled(
            project.name.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    let summary_width = page.width.saturating_sub(2);
    for row in wrap_text(&project.summary, summary_width) {
        page.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("▌ ", Style::default().fg(theme.accent)),
            Span::styled(row, Style::default().fg(theme.text_secondary)),
        ]));
    }
    if !project.technologies.is_empty() {
        page.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("▌ ", Style::default().fg(theme.accent)),
            Span::styled(
                project.technologies.join(" · "),
                Style::default().fg(theme.text_muted),
            ),
        ]));
    }
    page.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Arc;

    fn state() -> PageState {
        PageState::new(Arc::new(Catalog::embedded().unwrap()))
    }

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("fast reliable web products", 13),
            vec!["fast reliable", "web products"]
        );
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert_eq!(wrap_text("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_sections_are_contiguous_and_ordered() {
        let layout = build_page(&state(), &Theme::dark(), 100);
        let ids: Vec<SectionId> = layout.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());

        let mut expected_top = 0;
        for bounds in &layout.sections {
            assert_eq!(bounds.top, expected_top);
            assert!(bounds.height > 0);
            expected_top = bounds.bottom();
        }
        assert_eq!(expected_top, layout.height());
    }

    #[test]
    fn test_cards_follow_visible_order() {
        let layout = build_page(&state(), &Theme::dark(), 100);
        let projects = layout.section(SectionId::Projects).unwrap();
        let rows: Vec<String> = layout.lines
            [projects.top as usize..projects.bottom() as usize]
            .iter()
            .map(text_of)
            .collect();
        let position = |name: &str| rows.iter().position(|r| r.ends_with(name)).unwrap();
        assert!(position("DraftPilot") < position("QueueForge API"));
        assert!(position("QueueForge API") < position("PulseBoard"));
        assert!(position("PulseBoard") < position("Storefront Core"));
    }

    #[test]
    fn test_narrow_terminal_makes_taller_page() {
        let wide = build_page(&state(), &Theme::dark(), 160);
        let narrow = build_page(&state(), &Theme::dark(), 40);
        assert!(narrow.height() > wide.height());
    }

    #[test]
    fn test_empty_filter_result_shows_message() {
        let mut state = state();
        state
            .apply_selection(Some("AI Tool"), Some("Redis"), None)
            .unwrap();
        let layout = build_page(&state, &Theme::dark(), 100);
        assert!(layout
            .lines
            .iter()
            .any(|l| text_of(l).contains("No projects match")));
    }
}
