use crate::domain::a004_wine::ui::card::WineGrid;
use crate::shared::api_utils::catalog_client;
use crate::shared::components::spinner::LoadingSpinner;
use crate::shared::document::set_page_title;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use crate::shared::view_loader::load_into;
use contracts::domain::a004_wine::aggregate::Wine;
use contracts::domain::common::CatalogResource;
use contracts::pages::home::load_top_rated;
use contracts::pages::ViewState;
use contracts::shared::request_sequence::RequestSequence;
use leptos::prelude::*;
use leptos_router::components::A;

fn section_blurb(resource: CatalogResource) -> (&'static str, &'static str) {
    match resource {
        CatalogResource::Wines => ("🍷", "Tintos, brancos, rosés e espumantes"),
        CatalogResource::Wineries => ("🏰", "Produtores do mundo inteiro"),
        CatalogResource::Regions => ("🗺️", "Terroirs e denominações de origem"),
        CatalogResource::Countries => ("🌍", "Vinhos por país de origem"),
        CatalogResource::Grapes => ("🍇", "Castas e suas características"),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let top_rated = RwSignal::new(ViewState::<Vec<Wine>>::Loading);
    let sequence = RequestSequence::new();

    set_page_title("");
    load_into(&sequence, top_rated, async move {
        load_top_rated(&catalog_client()).await
    });

    view! {
        <PageFrame page_id="home--custom" category=PAGE_CAT_CUSTOM>
            <section class="hero">
                <h1 class="hero__title">"Descubra o mundo do vinho"</h1>
                <p class="hero__subtitle">
                    "Explore vinhos, vinícolas, regiões, países e uvas em um só catálogo."
                </p>
                <A href=CatalogResource::Wines.list_route() attr:class="button button--primary">
                    "Explorar vinhos"
                </A>
            </section>

            <section class="quick-nav">
                {CatalogResource::ALL
                    .into_iter()
                    .map(|resource| {
                        let (glyph, blurb) = section_blurb(resource);
                        view! {
                            <A href=resource.list_route() attr:class="quick-nav__card">
                                <span class="quick-nav__glyph">{glyph}</span>
                                <span class="quick-nav__title">{resource.title()}</span>
                                <span class="quick-nav__blurb">{blurb}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="section">
                <h2 class="section__title">"Mais bem avaliados"</h2>
                {move || match top_rated.get() {
                    ViewState::Loading => view! { <LoadingSpinner /> }.into_any(),
                    ViewState::Empty => view! {
                        <p class="section__empty">"Nenhum vinho avaliado ainda."</p>
                    }
                    .into_any(),
                    ViewState::Ready(wines) => view! { <WineGrid wines=wines /> }.into_any(),
                }}
            </section>
        </PageFrame>
    }
}
