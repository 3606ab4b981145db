//! Static HTML rendering of the page view.
//!
//! Output depends only on the `PageView`, so the server renders once at
//! startup and `landing render` writes the same bytes to disk.

use std::fmt::Write;

use crate::page::PageView;
use crate::style::{ElementRole, StylingStrategy};

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn open_tag(page: &PageView, tag: &str, role: ElementRole) -> String {
    match page.strategy {
        StylingStrategy::Inline => format!(
            "<{} class=\"{}\" style=\"{}\">",
            tag,
            role.class_name(),
            escape_html(&page.style.rule(role).to_css())
        ),
        StylingStrategy::Classes => format!("<{} class=\"{}\">", tag, role.class_name()),
    }
}

fn hero_image(page: &PageView) -> String {
    let src = escape_html(page.hero_src.as_str());
    match page.strategy {
        StylingStrategy::Inline => format!(
            "<img src=\"{}\" alt=\"\" style=\"{}\">",
            src,
            escape_html(&page.style.rule(ElementRole::Hero).to_css())
        ),
        StylingStrategy::Classes => format!("<img src=\"{}\" alt=\"\">", src),
    }
}

/// The container fragment: hero wrapper with its image, then the tagline.
pub fn render_body(page: &PageView) -> String {
    let mut out = String::new();
    out.push_str(&open_tag(page, "div", ElementRole::Container));
    out.push('\n');
    // The hero rule styles the image, so the wrapper only carries its class
    let _ = writeln!(
        out,
        "  <div class=\"{}\">{}</div>",
        ElementRole::Hero.class_name(),
        hero_image(page)
    );
    let _ = writeln!(
        out,
        "  {}{}</div>",
        open_tag(page, "div", ElementRole::Tagline),
        escape_html(page.tagline)
    );
    out.push_str("</div>");
    out
}

/// Contents of the document's `<style>` block.
pub fn render_styles(page: &PageView) -> String {
    let mut css = String::from("body { margin: 0; }\n");
    css.push_str(&page.style.keyframes_css());
    if page.strategy == StylingStrategy::Classes {
        css.push('\n');
        css.push_str(&page.style.rules_css());
    }
    css
}

/// Full HTML document for the page.
pub fn render_document(page: &PageView) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&page.title));
    let _ = writeln!(out, "<style>\n{}\n</style>", render_styles(page));
    out.push_str("</head>\n<body>\n");
    out.push_str(&render_body(page));
    out.push_str("\n</body>\n</html>\n");
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
