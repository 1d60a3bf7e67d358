use super::view_model::WineDetailsViewModel;
use crate::domain::a004_wine::ui::card::WineGrid;
use crate::shared::api_utils::image_url_for;
use crate::shared::components::breadcrumbs::Breadcrumbs;
use crate::shared::components::country_flag::CountryFlag;
use crate::shared::components::json_ld::JsonLdScript;
use crate::shared::components::not_found::NotFoundCard;
use crate::shared::components::spinner::LoadingSpinner;
use crate::shared::components::ui::{Badge, RatingBadge};
use crate::shared::components::wine_image::WineImage;
use crate::shared::document::apply_metadata;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::route_params::use_slug;
use contracts::domain::a004_wine::aggregate::Wine;
use contracts::domain::common::CatalogResource;
use contracts::pages::detail::WineDetail;
use contracts::pages::ViewState;
use contracts::seo::json_ld::wine_json_ld;
use contracts::seo::metadata::wine_metadata;
use contracts::shared::breadcrumbs::wine_trail;
use contracts::shared::text::paragraphs;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn WineDetails() -> impl IntoView {
    let vm = WineDetailsViewModel::new();
    let slug = use_slug();
    let state = vm.state;

    Effect::new({
        let vm = vm.clone();
        move |_| vm.load(slug.get())
    });

    Effect::new(move |_| {
        state.with(|s| match s {
            ViewState::Ready(detail) => apply_metadata(&wine_metadata(Some(&detail.wine))),
            ViewState::Empty => apply_metadata(&wine_metadata(None)),
            ViewState::Loading => {}
        })
    });

    view! {
        <PageFrame page_id="a004_wine--detail" category=PAGE_CAT_DETAIL>
            {move || match state.get() {
                ViewState::Loading => view! { <LoadingSpinner /> }.into_any(),
                ViewState::Empty => view! {
                    <NotFoundCard resource=CatalogResource::Wines message="Vinho não encontrado" />
                }
                .into_any(),
                ViewState::Ready(detail) => view! { <WineDetailBody detail=detail /> }.into_any(),
            }}
        </PageFrame>
    }
}

fn fact(label: &'static str, value: Option<String>) -> impl IntoView {
    value.map(|v| view! {
        <div class="facts__item">
            <dt class="facts__label">{label}</dt>
            <dd class="facts__value">{v}</dd>
        </div>
    })
}

#[component]
fn WineDetailBody(detail: WineDetail) -> impl IntoView {
    let WineDetail { wine, related } = detail;
    let image_url = image_url_for(wine.vivino_id.as_deref());
    let json_ld = wine_json_ld(&wine, image_url.as_deref());
    let trail = wine_trail(&wine);
    let origin = origin_line(&wine);
    let description = wine.description.clone().unwrap_or_default();
    let winery = wine.winery.clone();

    view! {
        <JsonLdScript data=json_ld />
        <div class="page__header">
            <Breadcrumbs trail=trail />
        </div>
        <div class="page__content wine-detail">
            <WineImage vivino_id=wine.vivino_id.clone() alt=wine.name.clone() class="wine-detail__image" />
            <div class="wine-detail__info">
                <h1 class="wine-detail__title">{wine.name.clone()}</h1>
                {winery.clone().map(|w| view! {
                    <A href=CatalogResource::Wineries.detail_route(&w.slug) attr:class="wine-detail__winery">
                        {w.name}
                    </A>
                })}
                {origin.map(|(region, country)| view! {
                    <div class="wine-detail__origin">
                        {icon("map-pin")}
                        <span>{region}</span>
                        {country.map(|c| view! { <CountryFlag name=c with_name=true /> })}
                    </div>
                })}
                <div class="wine-detail__badges">
                    {wine.wine_type.clone().map(|t| view! { <Badge variant="wine">{t}</Badge> })}
                    {wine.wine_style.clone().map(|s| view! { <Badge>{s}</Badge> })}
                    <RatingBadge label=wine.rating_label() />
                </div>
                {wine.price_label().map(|p| view! { <div class="wine-detail__price">{p}</div> })}

                <dl class="facts">
                    {fact("Safra", wine.vintage.map(|v| v.to_string()))}
                    {fact("Teor alcoólico", wine.alcohol_label())}
                    {fact("Volume", wine.volume_label())}
                    {fact("Temperatura de serviço", wine.serving_temperature.clone())}
                </dl>

                {(!wine.grapes.is_empty()).then(|| view! {
                    <div class="wine-detail__grapes">
                        <h2 class="section__title">"Uvas"</h2>
                        <div class="chip-list">
                            {wine.grapes.iter().map(|g| view! {
                                <A href=CatalogResource::Grapes.detail_route(&g.slug) attr:class="chip">
                                    {g.name.clone()}
                                </A>
                            }).collect_view()}
                        </div>
                    </div>
                })}

                {(!description.is_empty()).then(|| view! {
                    <div class="wine-detail__description">
                        {paragraphs(&description)
                            .into_iter()
                            .map(|p| view! { <p>{p.to_string()}</p> })
                            .collect_view()}
                    </div>
                })}
            </div>
        </div>

        {(!related.is_empty()).then(|| {
            let heading = winery
                .map(|w| format!("Outros vinhos de {}", w.name))
                .unwrap_or_else(|| "Outros vinhos".to_string());
            view! {
                <section class="section">
                    <h2 class="section__title">{heading}</h2>
                    <WineGrid wines=related />
                </section>
            }
        })}
    }
}

/// Region name and, when known, its country
fn origin_line(wine: &Wine) -> Option<(String, Option<String>)> {
    let region = wine.winery.as_ref()?.region.as_ref()?;
    Some((region.name.clone(), region.country_name().map(str::to_string)))
}
