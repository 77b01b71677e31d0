//! HTML rendering of the portfolio page.
//!
//! The same renderer serves two purposes: the web host returns it for `GET /`
//! and the `export` command writes it to a standalone file. A served page links
//! the stylesheet and the page script; a standalone page inlines the stylesheet
//! and carries no script, so its highlight stays on the section active at
//! export time.

pub mod escape;
pub mod projects;
pub mod sections;

pub use escape::escape_html;
pub use projects::render_projects;

use std::fmt::Write;

use crate::app::PageState;
use crate::branding::APP_DISPLAY_NAME;
use crate::services::ObserverOptions;

/// Stylesheet shared by the served and the standalone page.
pub const STYLESHEET: &str = include_str!("../../assets/styles.css");

/// How the rendered document reaches the visitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delivery<'a> {
    /// Served by the web host: linked assets, live filter form, and the
    /// tracking script observing with these options
    Served(&'a ObserverOptions),
    /// Written to a file: inlined stylesheet, read-only controls
    Standalone,
}

/// Renders the full page for `state`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use devfolio::app::PageState;
/// use devfolio::catalog::Catalog;
/// use devfolio::export::{export_to_html, Delivery};
///
/// let state = PageState::new(Arc::new(Catalog::embedded().unwrap()));
/// let html = export_to_html(&state, Delivery::Standalone);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
#[must_use]
pub fn export_to_html(state: &PageState, delivery: Delivery<'_>) -> String {
    let catalog = state.catalog();
    let mut output = String::with_capacity(16 * 1024);

    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    output.push_str("<title>");
    output.push_str(&escape_html(&catalog.profile.brand));
    output.push_str(" | ");
    output.push_str(APP_DISPLAY_NAME);
    output.push_str("</title>\n");
    match delivery {
        Delivery::Served(_) => {
            output.push_str("<link rel=\"stylesheet\" href=\"/assets/styles.css\">\n");
            output.push_str("<script src=\"/assets/page.js\" defer></script>\n");
        }
        Delivery::Standalone => {
            output.push_str("<style>\n");
            output.push_str(STYLESHEET);
            output.push_str("</style>\n");
        }
    }
    output.push_str("</head>\n<body>\n");

    output.push_str("<main class=\"portfolio-root\" id=\"top\"");
    if let Delivery::Served(observer) = delivery {
        let _ = write!(
            output,
            " data-root-margin=\"{}\" data-thresholds=\"{}\"",
            observer.root_margin(),
            observer.threshold_list()
        );
    }
    output.push_str(">\n");
    output.push_str("<div class=\"aura aura-navy\"></div>\n<div class=\"aura aura-pink\"></div>\n");
    sections::render_header(&mut output, catalog, state.active_section());
    sections::render_hero(&mut output, &catalog.profile);
    sections::render_tech(&mut output, &catalog.technology_groups);
    projects::render_projects(
        &mut output,
        state,
        matches!(delivery, Delivery::Served(_)),
    );
    sections::render_contact_and_blog(&mut output, &catalog.profile, &catalog.blog_posts);
    output.push_str("</main>\n</body>\n</html>\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::SectionId;
    use std::sync::Arc;

    fn served(state: &PageState) -> String {
        export_to_html(state, Delivery::Served(&ObserverOptions::default()))
    }

    fn state() -> PageState {
        PageState::new(Arc::new(Catalog::embedded().unwrap()))
    }

    #[test]
    fn test_every_section_has_an_anchor() {
        let html = served(&state());
        for id in SectionId::ALL {
            assert!(
                html.contains(&format!("id=\"{id}\"")),
                "missing anchor for {id}"
            );
        }
    }

    #[test]
    fn test_served_page_links_assets() {
        let html = served(&state());
        assert!(html.contains("/assets/styles.css"));
        assert!(html.contains("/assets/page.js"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_served_page_carries_observer_options() {
        let html = served(&state());
        assert!(html.contains(
            "<main class=\"portfolio-root\" id=\"top\" data-root-margin=\"-20% 0px -45% 0px\" data-thresholds=\"0.25,0.5,0.75\">"
        ));

        let options = ObserverOptions {
            top_margin: 0.125,
            bottom_margin: 0.3,
            thresholds: vec![0.1, 0.9],
        };
        let html = export_to_html(&state(), Delivery::Served(&options));
        assert!(html.contains("data-root-margin=\"-12.5% 0px -30% 0px\""));
        assert!(html.contains("data-thresholds=\"0.1,0.9\""));
    }

    #[test]
    fn test_standalone_page_inlines_styles() {
        let html = export_to_html(&state(), Delivery::Standalone);
        assert!(html.contains("<style>"));
        assert!(!html.contains("<script"));
        assert!(html.contains("<title>ciorhan.dev | Devfolio</title>"));
    }

    #[test]
    fn test_active_section_highlighted() {
        let html = export_to_html(&state(), Delivery::Standalone);
        assert!(html.contains("href=\"#top\" class=\"is-active\""));
    }
}
