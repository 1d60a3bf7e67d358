use crate::shared::document::set_page_title;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown paths
#[component]
pub fn NotFoundPage() -> impl IntoView {
    set_page_title("Página não encontrada");

    view! {
        <PageFrame page_id="not_found--custom" category=PAGE_CAT_CUSTOM>
            <div class="not-found">
                <div class="not-found__code">"404"</div>
                <h1 class="not-found__title">"Página não encontrada"</h1>
                <A href="/" attr:class="button button--primary">"Voltar ao início"</A>
            </div>
        </PageFrame>
    }
}
