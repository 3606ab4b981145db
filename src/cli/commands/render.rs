use std::path::Path;

use crate::config::SiteConfig;
use crate::error::SiteResult;
use crate::render::render_document;

/// Render the page. Returns the document itself when `out` is `None`,
/// otherwise writes it to `out` and returns a summary line.
pub fn render(config: &SiteConfig, out: Option<&Path>) -> SiteResult<String> {
    let html = render_document(&config.page_view()?);

    match out {
        Some(path) => {
            std::fs::write(path, &html)?;
            Ok(format!("Wrote {} bytes to {}", html.len(), path.display()))
        }
        None => Ok(html),
    }
}
