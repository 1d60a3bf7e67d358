pub mod state;

use self::state::create_state;
use super::card::RegionGrid;
use crate::shared::api_utils::catalog_client;
use crate::shared::components::breadcrumbs::Breadcrumbs;
use crate::shared::components::country_flag::CountryFlag;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::spinner::LoadingSpinner;
use crate::shared::document::apply_metadata;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::view_loader::load_into;
use contracts::domain::a002_region::aggregate::Region;
use contracts::domain::common::CatalogResource;
use contracts::pages::list::load_list;
use contracts::pages::ViewState;
use contracts::seo::metadata::list_metadata;
use contracts::shared::breadcrumbs::Trail;
use contracts::shared::grouping::{group_regions_by_country, UNKNOWN_COUNTRY_GROUP};
use contracts::shared::request_sequence::RequestSequence;
use contracts::shared::text::pluralize;
use leptos::prelude::*;

/// Regions grouped under their country, groups in order of first appearance
#[component]
#[allow(non_snake_case)]
pub fn RegionList() -> impl IntoView {
    let query = create_state();
    let items = RwSignal::new(ViewState::<Vec<Region>>::Loading);
    let sequence = RequestSequence::new();

    apply_metadata(&list_metadata(CatalogResource::Regions));

    Effect::new(move |_| {
        let q = query.get();
        load_into(&sequence, items, async move {
            load_list(&catalog_client(), &q).await
        });
    });

    let clear_filters = Callback::new(move |_| query.update(|q| *q = q.cleared()));
    let subtitle = Signal::derive(move || {
        items.with(|s| s.ready().map(|r| pluralize(r.len(), "região", "regiões")))
    });

    view! {
        <PageFrame page_id="a002_region--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <Breadcrumbs trail=Trail::for_list(CatalogResource::Regions) />
                <PageHeader title="Regiões" subtitle=subtitle />
                <FilterPanel query=query search_placeholder="Buscar regiões..." />
            </div>
            <div class="page__content">
                {move || match items.get() {
                    ViewState::Loading => view! { <LoadingSpinner /> }.into_any(),
                    ViewState::Empty => view! {
                        <EmptyState message="Nenhuma região encontrada" on_clear=clear_filters />
                    }
                    .into_any(),
                    ViewState::Ready(regions) => group_regions_by_country(regions)
                        .into_iter()
                        .map(|group| {
                            let flag = (group.label != UNKNOWN_COUNTRY_GROUP)
                                .then(|| view! { <CountryFlag name=group.label.clone() /> });
                            view! {
                                <section class="group">
                                    <h2 class="group__title">{flag} {group.label}</h2>
                                    <RegionGrid regions=group.items />
                                </section>
                            }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </PageFrame>
    }
}
