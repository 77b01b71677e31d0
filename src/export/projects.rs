//! Renderer for the `projects` section: filter controls plus the card grid.

use std::fmt::Display;
use std::fmt::Write as _;

use crate::app::PageState;
use crate::models::{Project, SectionId, SortMode};

use super::escape::escape_html;

/// Message shown when no project passes the filters.
pub const EMPTY_MESSAGE: &str = "No projects match the selected filters.";

/// Renders the projects section for the state's current filter.
///
/// With `interactive` set the controls are a GET form targeting `/`, so a
/// browser (or the page script) can resubmit a new selection. Without it the
/// selects are disabled and only show the exported selection.
pub fn render_projects(output: &mut String, state: &PageState, interactive: bool) {
    let filter = state.filter();
    let options = state.options();

    let _ = writeln!(output, "<section class=\"section\" id=\"{}\">", SectionId::Projects);
    output.push_str("  <div class=\"section-head\"><h2>Projects</h2></div>\n");
    if interactive {
        output.push_str(
            "  <form class=\"project-controls\" method=\"get\" action=\"/#projects\">\n",
        );
    } else {
        output.push_str("  <div class=\"project-controls\">\n");
    }

    render_select(
        output,
        "Sort by",
        "sort",
        SortMode::ALL.iter().map(|mode| (mode.as_str(), mode.label())),
        filter.sort_by.as_str(),
        interactive,
    );

    let categories: Vec<String> = options.categories.iter().map(ToString::to_string).collect();
    render_select(
        output,
        "Category",
        "category",
        categories.iter().map(|c| (c.as_str(), c.as_str())),
        &filter.category.to_string(),
        interactive,
    );

    let technologies: Vec<String> = options
        .technologies
        .iter()
        .map(ToString::to_string)
        .collect();
    render_select(
        output,
        "Technology",
        "tech",
        technologies.iter().map(|t| (t.as_str(), t.as_str())),
        &filter.technology.to_string(),
        interactive,
    );

    if interactive {
        output.push_str("    <noscript><button type=\"submit\">Apply</button></noscript>\n");
        output.push_str("  </form>\n");
    } else {
        output.push_str("  </div>\n");
    }

    output.push_str("  <div class=\"project-grid\">\n");
    let mut any = false;
    for project in state.visible_projects() {
        render_card(output, project);
        any = true;
    }
    if !any {
        let _ = writeln!(output, "    <p class=\"empty-state\">{EMPTY_MESSAGE}</p>");
    }
    output.push_str("  </div>\n</section>\n");
}

fn render_select<'a, V>(
    output: &mut String,
    label: &str,
    name: &str,
    options: impl Iterator<Item = (&'a str, V)>,
    selected: &str,
    interactive: bool,
) where
    V: Display,
{
    let disabled = if interactive { "" } else { " disabled" };
    let _ = writeln!(
        output,
        "    <label>{label}\n      <select name=\"{name}\"{disabled}>"
    );
    for (value, text) in options {
        let mark = if value == selected { " selected" } else { "" };
        let _ = writeln!(
            output,
            "        <option value=\"{}\"{mark}>{}</option>",
            escape_html(value),
            escape_html(&text.to_string())
        );
    }
    output.push_str("      </select>\n    </label>\n");
}

fn render_card(output: &mut String, project: &Project) {
    output.push_str("    <article class=\"project-card\">\n");
    let _ = writeln!(
        output,
        "      <p class=\"meta\">{}</p>\n      <h3>{}</h3>\n      <p>{}</p>",
        project.category,
        escape_html(&project.name),
        escape_html(&project.summary)
    );
    output.push_str("      <div class=\"tag-list\">");
    for tech in &project.technologies {
        let _ = write!(output, "<span>{}</span>", escape_html(tech));
    }
    output.push_str("</div>\n    </article>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{Choice, ProjectCategory};
    use std::sync::Arc;

    fn state() -> PageState {
        PageState::new(Arc::new(Catalog::embedded().unwrap()))
    }

    fn card_titles(html: &str) -> Vec<&str> {
        html.split("<h3>")
            .skip(1)
            .filter_map(|rest| rest.split("</h3>").next())
            .collect()
    }

    #[test]
    fn test_cards_follow_visible_order() {
        let mut output = String::new();
        render_projects(&mut output, &state(), true);
        assert_eq!(
            card_titles(&output),
            vec!["DraftPilot", "QueueForge API", "PulseBoard", "Storefront Core"]
        );
        assert!(output.contains("<option value=\"category\" selected>Category</option>"));
        assert!(output.contains("<option value=\"All\" selected>All</option>"));
        assert!(output.contains("action=\"/#projects\""));
    }

    #[test]
    fn test_selected_filter_is_marked() {
        let mut state = state();
        state
            .set_category_filter(Choice::Only(ProjectCategory::WebApp))
            .unwrap();
        let mut output = String::new();
        render_projects(&mut output, &state, false);

        assert!(output.contains("<option value=\"Web App\" selected>Web App</option>"));
        assert!(output.contains("<select name=\"category\" disabled>"));
        assert_eq!(card_titles(&output), vec!["PulseBoard", "Storefront Core"]);
        assert!(!output.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_empty_result_shows_message() {
        let mut state = state();
        state
            .apply_selection(Some("AI Tool"), Some("Redis"), None)
            .unwrap();
        let mut output = String::new();
        render_projects(&mut output, &state, true);
        assert!(output.contains(EMPTY_MESSAGE));
        assert!(card_titles(&output).is_empty());
    }
}
