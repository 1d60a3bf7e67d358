pub mod state;

use self::state::create_state;
use crate::shared::api_utils::catalog_client;
use crate::shared::components::breadcrumbs::Breadcrumbs;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::spinner::LoadingSpinner;
use crate::shared::document::apply_metadata;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::view_loader::load_into;
use contracts::domain::a005_grape::aggregate::Grape;
use contracts::domain::common::CatalogResource;
use contracts::pages::list::load_list;
use contracts::pages::ViewState;
use contracts::seo::metadata::list_metadata;
use contracts::shared::breadcrumbs::Trail;
use contracts::shared::grouping::group_grapes_by_color;
use contracts::shared::request_sequence::RequestSequence;
use contracts::shared::text::pluralize;
use leptos::prelude::*;
use leptos_router::components::A;

/// Characteristics shown on a card
const CARD_CHARACTERISTICS: usize = 3;

#[component]
fn GrapeCard(grape: Grape) -> impl IntoView {
    let color = grape.color_category();
    let characteristics: Vec<String> = grape
        .characteristics_list()
        .into_iter()
        .take(CARD_CHARACTERISTICS)
        .collect();
    let wines = grape
        .wine_count
        .map(|n| pluralize(n as usize, "vinho", "vinhos"));

    view! {
        <A
            href=grape.route()
            attr:class=format!("card card--grape card--grape-{}", color.css_modifier())
        >
            <div class="card__body">
                <h3 class="card__title">{grape.name.clone()}</h3>
                {grape.color.clone().map(|c| view! { <div class="card__subtitle">{c}</div> })}
                <div class="chip-list">
                    {characteristics
                        .into_iter()
                        .map(|c| view! { <span class="chip">{c}</span> })
                        .collect_view()}
                </div>
                {wines.map(|w| view! { <span class="card__count">{w}</span> })}
            </div>
        </A>
    }
}

/// Grapes grouped by color category
#[component]
#[allow(non_snake_case)]
pub fn GrapeList() -> impl IntoView {
    let query = create_state();
    let items = RwSignal::new(ViewState::<Vec<Grape>>::Loading);
    let sequence = RequestSequence::new();

    apply_metadata(&list_metadata(CatalogResource::Grapes));

    Effect::new(move |_| {
        let q = query.get();
        load_into(&sequence, items, async move {
            load_list(&catalog_client(), &q).await
        });
    });

    let clear_filters = Callback::new(move |_| query.update(|q| *q = q.cleared()));
    let subtitle = Signal::derive(move || {
        items.with(|s| s.ready().map(|g| pluralize(g.len(), "uva", "uvas")))
    });

    view! {
        <PageFrame page_id="a005_grape--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <Breadcrumbs trail=Trail::for_list(CatalogResource::Grapes) />
                <PageHeader title="Uvas" subtitle=subtitle />
                <FilterPanel query=query search_placeholder="Buscar uvas..." />
            </div>
            <div class="page__content">
                {move || match items.get() {
                    ViewState::Loading => view! { <LoadingSpinner /> }.into_any(),
                    ViewState::Empty => view! {
                        <EmptyState message="Nenhuma uva encontrada" on_clear=clear_filters />
                    }
                    .into_any(),
                    ViewState::Ready(grapes) => group_grapes_by_color(grapes)
                        .into_iter()
                        .map(|group| view! {
                            <section class="group">
                                <h2 class="group__title">{group.label}</h2>
                                <div class="card-grid">
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|grape| view! { <GrapeCard grape=grape /> })
                                        .collect_view()}
                                </div>
                            </section>
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </PageFrame>
    }
}
