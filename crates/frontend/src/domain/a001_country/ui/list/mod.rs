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
use contracts::domain::a001_country::aggregate::Country;
use contracts::domain::common::CatalogResource;
use contracts::pages::list::load_list;
use contracts::pages::ViewState;
use contracts::seo::metadata::list_metadata;
use contracts::shared::breadcrumbs::Trail;
use contracts::shared::flags::country_flag_for;
use contracts::shared::request_sequence::RequestSequence;
use contracts::shared::text::pluralize;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
fn CountryCard(country: Country) -> impl IntoView {
    let flag = country_flag_for(&country.name);
    let regions = country
        .regions_count
        .map(|n| pluralize(n as usize, "região", "regiões"));

    view! {
        <A href=country.route() attr:class="card card--country">
            <div class="card__flag">{flag}</div>
            <div class="card__body">
                <h3 class="card__title">{country.name.clone()}</h3>
                {regions.map(|r| view! { <span class="card__count">{r}</span> })}
            </div>
        </A>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CountryList() -> impl IntoView {
    let query = create_state();
    let items = RwSignal::new(ViewState::<Vec<Country>>::Loading);
    let sequence = RequestSequence::new();

    apply_metadata(&list_metadata(CatalogResource::Countries));

    Effect::new(move |_| {
        let q = query.get();
        load_into(&sequence, items, async move {
            load_list(&catalog_client(), &q).await
        });
    });

    let clear_filters = Callback::new(move |_| query.update(|q| *q = q.cleared()));
    let subtitle = Signal::derive(move || {
        items.with(|s| s.ready().map(|c| pluralize(c.len(), "país", "países")))
    });

    view! {
        <PageFrame page_id="a001_country--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <Breadcrumbs trail=Trail::for_list(CatalogResource::Countries) />
                <PageHeader title="Países" subtitle=subtitle />
                <FilterPanel query=query search_placeholder="Buscar países..." />
            </div>
            <div class="page__content">
                {move || match items.get() {
                    ViewState::Loading => view! { <LoadingSpinner /> }.into_any(),
                    ViewState::Empty => view! {
                        <EmptyState message="Nenhum país encontrado" on_clear=clear_filters />
                    }
                    .into_any(),
                    ViewState::Ready(countries) => view! {
                        <div class="card-grid card-grid--compact">
                            {countries
                                .into_iter()
                                .map(|country| view! { <CountryCard country=country /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}
