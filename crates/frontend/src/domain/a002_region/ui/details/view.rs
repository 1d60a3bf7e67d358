use super::view_model::RegionDetailsViewModel;
use crate::domain::a003_winery::ui::card::WineryGrid;
use crate::shared::components::breadcrumbs::Breadcrumbs;
use crate::shared::components::country_flag::CountryFlag;
use crate::shared::components::not_found::NotFoundCard;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::spinner::LoadingSpinner;
use crate::shared::document::set_page_title;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::route_params::use_slug;
use contracts::domain::common::CatalogResource;
use contracts::pages::detail::RegionDetail;
use contracts::pages::ViewState;
use contracts::shared::breadcrumbs::Trail;
use contracts::shared::text::{paragraphs, pluralize};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn RegionDetails() -> impl IntoView {
    let vm = RegionDetailsViewModel::new();
    let slug = use_slug();
    let state = vm.state;

    Effect::new({
        let vm = vm.clone();
        move |_| vm.load(slug.get())
    });

    Effect::new(move |_| {
        state.with(|s| match s {
            ViewState::Ready(detail) => set_page_title(&detail.region.name),
            ViewState::Empty => set_page_title("Região não encontrada"),
            ViewState::Loading => {}
        })
    });

    view! {
        <PageFrame page_id="a002_region--detail" category=PAGE_CAT_DETAIL>
            {move || match state.get() {
                ViewState::Loading => view! { <LoadingSpinner /> }.into_any(),
                ViewState::Empty => view! {
                    <NotFoundCard resource=CatalogResource::Regions message="Região não encontrada" />
                }
                .into_any(),
                ViewState::Ready(detail) => view! { <RegionDetailBody detail=detail /> }.into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn RegionDetailBody(detail: RegionDetail) -> impl IntoView {
    let RegionDetail { region, wineries } = detail;
    let trail = Trail::for_detail(CatalogResource::Regions, &region.name);
    let description = region.description.clone().unwrap_or_default();
    let country = region.country.clone();
    let winery_count = pluralize(
        region.winery_total().map(|n| n as usize).unwrap_or(wineries.len()),
        "vinícola",
        "vinícolas",
    );
    let wine_count = region
        .wine_total()
        .map(|n| pluralize(n as usize, "vinho", "vinhos"));

    view! {
        <div class="page__header">
            <Breadcrumbs trail=trail />
            <PageHeader title=region.name.clone()>
                {country.map(|c| view! {
                    <A href=CatalogResource::Countries.detail_route(&c.slug) attr:class="region-detail__country">
                        <CountryFlag name=c.name with_name=true />
                    </A>
                })}
            </PageHeader>
        </div>
        <div class="page__content">
            <div class="stats">
                <span class="stats__item">{winery_count}</span>
                {wine_count.map(|w| view! { <span class="stats__item">{w}</span> })}
                {region.vivino_url.clone().map(|url| view! {
                    <a class="stats__link" href=url target="_blank" rel="noopener">
                        "Vivino " {icon("external")}
                    </a>
                })}
            </div>

            {(!description.is_empty()).then(|| view! {
                <div class="region-detail__description">
                    {paragraphs(&description)
                        .into_iter()
                        .map(|p| view! { <p>{p.to_string()}</p> })
                        .collect_view()}
                </div>
            })}

            <section class="section">
                <h2 class="section__title">"Vinícolas"</h2>
                {if wineries.is_empty() {
                    view! { <p class="section__empty">"Nenhuma vinícola cadastrada nesta região."</p> }.into_any()
                } else {
                    view! { <WineryGrid wineries=wineries /> }.into_any()
                }}
            </section>
        </div>
    }
}
