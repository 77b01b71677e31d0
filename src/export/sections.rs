//! Renderers for the static page sections: navigation, hero, technology
//! showcase, contact, and blog.

use std::fmt::Write as _;

use crate::catalog::{Catalog, Profile};
use crate::models::{BlogPost, NavItem, SectionId, TechGroup, Technology};

use super::escape::escape_html;

/// Base URL of the Simple Icons CDN used for technology logos.
pub const ICON_CDN: &str = "https://cdn.simpleicons.org";

/// Renders the header with the brand link and the main navigation.
///
/// The item for `active` carries the `is-active` class.
pub fn render_header(output: &mut String, catalog: &Catalog, active: SectionId) {
    let brand = escape_html(&catalog.profile.brand);
    output.push_str("<header class=\"nav-shell\">\n");
    let _ = writeln!(
        output,
        "  <a class=\"brand\" href=\"#top\" aria-label=\"{brand}\">{brand}</a>"
    );
    output.push_str(
        "  <nav id=\"main-nav\" aria-label=\"Main navigation\" class=\"menu-wrap\">\n    <ul class=\"menu\">\n",
    );
    for item in &catalog.nav_items {
        render_nav_item(output, item, item.id == active);
    }
    output.push_str("    </ul>\n  </nav>\n</header>\n");
}

fn render_nav_item(output: &mut String, item: &NavItem, active: bool) {
    let class = if active { "is-active" } else { "" };
    let _ = writeln!(
        output,
        "      <li><a href=\"{}\" class=\"{class}\" data-section=\"{}\">{}</a></li>",
        escape_html(&item.target()),
        item.id,
        escape_html(&item.label)
    );
}

/// Decorative shapes of the hero illustration, back to front.
const HERO_SHAPES: [&str; 9] = [
    "ring ring-a",
    "ring ring-b",
    "ring ring-c",
    "node node-a",
    "node node-b",
    "node node-c",
    "trace trace-a",
    "trace trace-b",
    "trace trace-c",
];

/// Renders the hero (`about`) section.
pub fn render_hero(output: &mut String, profile: &Profile) {
    let _ = writeln!(output, "<section class=\"hero\" id=\"{}\">", SectionId::About);
    output.push_str("  <div class=\"hero-copy\">\n");
    let _ = writeln!(
        output,
        "    <p class=\"kicker\">{}</p>\n    <h1>{}</h1>\n    <p>{}</p>",
        escape_html(&profile.greeting),
        escape_html(&profile.headline),
        escape_html(&profile.intro)
    );
    output.push_str("  </div>\n  <div class=\"hero-illustration\" aria-hidden=\"true\">\n");
    for part in HERO_SHAPES {
        let _ = writeln!(output, "    <div class=\"{part}\"></div>");
    }
    let _ = writeln!(
        output,
        "    <p class=\"chip-float\">{}</p>",
        escape_html(&profile.hero_chip)
    );
    output.push_str("  </div>\n</section>\n");
}

/// Renders the technology showcase (`tech`) section.
pub fn render_tech(output: &mut String, groups: &[TechGroup]) {
    let _ = writeln!(output, "<section class=\"section\" id=\"{}\">", SectionId::Tech);
    output.push_str("  <div class=\"section-head\"><h2>Technologies I use and love</h2></div>\n");
    output.push_str("  <div class=\"tech-groups\">\n");
    for group in groups {
        output.push_str("    <article class=\"tech-group\">\n");
        let _ = writeln!(output, "      <h3>{}</h3>", group.name);
        output.push_str("      <div class=\"chip-list\">\n");
        for tech in &group.items {
            render_chip(output, tech);
        }
        output.push_str("      </div>\n    </article>\n");
    }
    output.push_str("  </div>\n</section>\n");
}

fn render_chip(output: &mut String, tech: &Technology) {
    let brand = tech.brand.to_hex();
    let _ = writeln!(
        output,
        "        <span class=\"chip brand-chip\" style=\"--chip-brand: {brand}; --chip-tone: {}\">\
         <img class=\"chip-logo\" src=\"{}\" alt=\"\" aria-hidden=\"true\" loading=\"lazy\">{}</span>",
        tech.tone,
        icon_url(tech),
        escape_html(&tech.name)
    );
}

/// CDN URL of a technology's logo, tinted with its brand color.
#[must_use]
pub fn icon_url(tech: &Technology) -> String {
    let hex = tech.brand.to_hex();
    format!(
        "{ICON_CDN}/{}/{}",
        escape_html(&tech.icon),
        hex.trim_start_matches('#')
    )
}

/// Renders the contact section with the blog list beside it.
pub fn render_contact_and_blog(output: &mut String, profile: &Profile, posts: &[BlogPost]) {
    let _ = writeln!(
        output,
        "<section class=\"section two-col\" id=\"{}\">",
        SectionId::Contact
    );
    output.push_str("  <article>\n    <div class=\"section-head\"><h2>Contact me</h2></div>\n");
    let email = escape_html(&profile.contact_email);
    let _ = writeln!(
        output,
        "    <p class=\"contact-copy\">{}</p>\n    <a class=\"contact-link\" href=\"mailto:{email}\">{email}</a>",
        escape_html(&profile.contact_copy)
    );
    output.push_str("  </article>\n");

    let _ = writeln!(output, "  <article id=\"{}\">", SectionId::Blog);
    output.push_str("    <div class=\"section-head\"><h2>Latest blog articles</h2></div>\n");
    output.push_str("    <ul class=\"blog-list\">\n");
    for post in posts {
        let _ = writeln!(
            output,
            "      <li><span>{}</span><p>{}</p></li>",
            post.display_date(),
            escape_html(&post.title)
        );
    }
    output.push_str("    </ul>\n  </article>\n</section>\n");
}
