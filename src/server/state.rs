use std::sync::Arc;

use crate::page::PageView;
use crate::render::render_document;

/// Shared server state: the page, rendered once at startup.
#[derive(Clone)]
pub struct AppState {
    page_html: Arc<str>,
}

impl AppState {
    pub fn new(page: &PageView) -> Self {
        Self {
            page_html: Arc::from(render_document(page)),
        }
    }

    pub fn page_html(&self) -> &str {
        &self.page_html
    }
}
