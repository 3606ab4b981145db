use landing::page::{AssetRef, PageView};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::Home;

/// Hero image baked in at build time, e.g. `LANDING_HERO_SRC=/img/a.png trunk build`.
fn page_view() -> PageView {
    let page = PageView::default();
    match option_env!("LANDING_HERO_SRC").and_then(AssetRef::new) {
        Some(src) => page.with_hero_src(src),
        None => page,
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let page = page_view();
    let title = page.title.clone();

    view! {
        <Title text=title/>
        <Home page/>
    }
}
