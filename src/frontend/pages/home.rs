use landing::page::PageView;
use landing::render::render_styles;
use landing::style::{ElementRole, StylingStrategy};
use leptos::prelude::*;
use leptos_meta::Style;

#[component]
pub fn Home(page: PageView) -> impl IntoView {
    // Class strategy leaves style attributes off and relies on the <Style> block
    let inline = |role: ElementRole| {
        (page.strategy == StylingStrategy::Inline).then(|| page.style.rule(role).to_css())
    };
    let container_style = inline(ElementRole::Container);
    let hero_style = inline(ElementRole::Hero);
    let tagline_style = inline(ElementRole::Tagline);
    let hero_src = page.hero_src.to_string();
    let styles = render_styles(&page);

    view! {
        <Style>{styles}</Style>
        <div class="container" style=container_style>
            <div class="hero">
                <img src=hero_src alt="" style=hero_style/>
            </div>
            <div class="tagline" style=tagline_style>
                {page.tagline}
            </div>
        </div>
    }
}
