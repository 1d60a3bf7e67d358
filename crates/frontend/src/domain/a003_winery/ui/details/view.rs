use super::view_model::WineryDetailsViewModel;
use crate::domain::a004_wine::ui::card::WineGrid;
use crate::shared::components::breadcrumbs::Breadcrumbs;
use crate::shared::components::country_flag::CountryFlag;
use crate::shared::components::json_ld::JsonLdScript;
use crate::shared::components::not_found::NotFoundCard;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::spinner::LoadingSpinner;
use crate::shared::document::apply_metadata;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::route_params::use_slug;
use contracts::domain::common::CatalogResource;
use contracts::pages::detail::WineryDetail;
use contracts::pages::ViewState;
use contracts::seo::json_ld::winery_json_ld;
use contracts::seo::metadata::winery_metadata;
use contracts::shared::breadcrumbs::Trail;
use contracts::shared::text::{paragraphs, pluralize};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn WineryDetails() -> impl IntoView {
    let vm = WineryDetailsViewModel::new();
    let slug = use_slug();
    let state = vm.state;

    Effect::new({
        let vm = vm.clone();
        move |_| vm.load(slug.get())
    });

    Effect::new(move |_| {
        state.with(|s| match s {
            ViewState::Ready(detail) => apply_metadata(&winery_metadata(Some(&detail.winery))),
            ViewState::Empty => apply_metadata(&winery_metadata(None)),
            ViewState::Loading => {}
        })
    });

    view! {
        <PageFrame page_id="a003_winery--detail" category=PAGE_CAT_DETAIL>
            {move || match state.get() {
                ViewState::Loading => view! { <LoadingSpinner /> }.into_any(),
                ViewState::Empty => view! {
                    <NotFoundCard resource=CatalogResource::Wineries message="Vinícola não encontrada" />
                }
                .into_any(),
                ViewState::Ready(detail) => view! { <WineryDetailBody detail=detail /> }.into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn WineryDetailBody(detail: WineryDetail) -> impl IntoView {
    // JSON-LD lists the winery's wines, so build it from the full record
    let mut full = detail.winery.clone();
    full.wines = detail.wines.clone();
    let json_ld = winery_json_ld(&full);

    let WineryDetail { winery, wines } = detail;
    let trail = Trail::for_detail(CatalogResource::Wineries, &winery.name);
    let description = winery.description.clone().unwrap_or_default();
    let region = winery.region.clone();
    let country = winery.country_name().map(str::to_string);
    let subtitle = winery.established_year.map(|y| format!("Fundada em {}", y));
    let wine_count = pluralize(wines.len(), "vinho", "vinhos");

    view! {
        <JsonLdScript data=json_ld />
        <div class="page__header">
            <Breadcrumbs trail=trail />
            <PageHeader title=winery.name.clone() subtitle=subtitle>
                {country.map(|c| view! { <CountryFlag name=c with_name=true /> })}
            </PageHeader>
        </div>
        <div class="page__content">
            <div class="winery-detail__meta">
                {region.map(|r| view! {
                    <A href=CatalogResource::Regions.detail_route(&r.slug) attr:class="winery-detail__region">
                        {icon("map-pin")}
                        {r.name}
                    </A>
                })}
                {winery.coordinates().map(|(lat, lon)| view! {
                    <span class="winery-detail__coords">{format!("{:.4}, {:.4}", lat, lon)}</span>
                })}
            </div>

            {(!description.is_empty()).then(|| view! {
                <div class="winery-detail__description">
                    {paragraphs(&description)
                        .into_iter()
                        .map(|p| view! { <p>{p.to_string()}</p> })
                        .collect_view()}
                </div>
            })}

            <section class="section">
                <h2 class="section__title">"Vinhos" <span class="section__count">{wine_count}</span></h2>
                {if wines.is_empty() {
                    view! { <p class="section__empty">"Nenhum vinho cadastrado para esta vinícola."</p> }.into_any()
                } else {
                    view! { <WineGrid wines=wines /> }.into_any()
                }}
            </section>
        </div>
    }
}
