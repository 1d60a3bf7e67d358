use super::view_model::CountryDetailsViewModel;
use crate::domain::a002_region::ui::card::RegionGrid;
use crate::shared::components::breadcrumbs::Breadcrumbs;
use crate::shared::components::not_found::NotFoundCard;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::spinner::LoadingSpinner;
use crate::shared::document::set_page_title;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::route_params::use_slug;
use contracts::domain::common::CatalogResource;
use contracts::pages::detail::CountryDetail;
use contracts::pages::ViewState;
use contracts::shared::breadcrumbs::Trail;
use contracts::shared::flags::country_with_flag;
use contracts::shared::text::{paragraphs, pluralize};
use leptos::prelude::*;

#[component]
pub fn CountryDetails() -> impl IntoView {
    let vm = CountryDetailsViewModel::new();
    let slug = use_slug();
    let state = vm.state;

    Effect::new({
        let vm = vm.clone();
        move |_| vm.load(slug.get())
    });

    Effect::new(move |_| {
        state.with(|s| match s {
            ViewState::Ready(detail) => set_page_title(&detail.country.name),
            ViewState::Empty => set_page_title("País não encontrado"),
            ViewState::Loading => {}
        })
    });

    view! {
        <PageFrame page_id="a001_country--detail" category=PAGE_CAT_DETAIL>
            {move || match state.get() {
                ViewState::Loading => view! { <LoadingSpinner /> }.into_any(),
                ViewState::Empty => view! {
                    <NotFoundCard resource=CatalogResource::Countries message="País não encontrado" />
                }
                .into_any(),
                ViewState::Ready(detail) => view! { <CountryDetailBody detail=detail /> }.into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn CountryDetailBody(detail: CountryDetail) -> impl IntoView {
    let CountryDetail { country, regions } = detail;
    let trail = Trail::for_detail(CatalogResource::Countries, &country.name);
    let description = country.description.clone().unwrap_or_default();
    let stats = [
        country.regions_count.map(|n| pluralize(n as usize, "região", "regiões")),
        country.wineries_count.map(|n| pluralize(n as usize, "vinícola", "vinícolas")),
        country.wines_count.map(|n| pluralize(n as usize, "vinho", "vinhos")),
    ];

    view! {
        <div class="page__header">
            <Breadcrumbs trail=trail />
            <PageHeader title=country_with_flag(&country.name) />
        </div>
        <div class="page__content">
            <div class="stats">
                {stats
                    .into_iter()
                    .flatten()
                    .map(|s| view! { <span class="stats__item">{s}</span> })
                    .collect_view()}
            </div>

            {(!description.is_empty()).then(|| view! {
                <div class="country-detail__description">
                    {paragraphs(&description)
                        .into_iter()
                        .map(|p| view! { <p>{p.to_string()}</p> })
                        .collect_view()}
                </div>
            })}

            <section class="section">
                <h2 class="section__title">"Regiões"</h2>
                {if regions.is_empty() {
                    view! { <p class="section__empty">"Nenhuma região cadastrada neste país."</p> }.into_any()
                } else {
                    view! { <RegionGrid regions=regions /> }.into_any()
                }}
            </section>
        </div>
    }
}
