use super::view_model::GrapeDetailsViewModel;
use crate::domain::a004_wine::ui::card::WineGrid;
use crate::shared::components::breadcrumbs::Breadcrumbs;
use crate::shared::components::not_found::NotFoundCard;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::spinner::LoadingSpinner;
use crate::shared::components::ui::Badge;
use crate::shared::document::set_page_title;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::route_params::use_slug;
use contracts::domain::common::CatalogResource;
use contracts::pages::detail::GrapeDetail;
use contracts::pages::ViewState;
use contracts::shared::breadcrumbs::Trail;
use contracts::shared::text::paragraphs;
use leptos::prelude::*;

#[component]
pub fn GrapeDetails() -> impl IntoView {
    let vm = GrapeDetailsViewModel::new();
    let slug = use_slug();
    let state = vm.state;

    Effect::new({
        let vm = vm.clone();
        move |_| vm.load(slug.get())
    });

    Effect::new(move |_| {
        state.with(|s| match s {
            ViewState::Ready(detail) => set_page_title(&detail.grape.name),
            ViewState::Empty => set_page_title("Uva não encontrada"),
            ViewState::Loading => {}
        })
    });

    view! {
        <PageFrame page_id="a005_grape--detail" category=PAGE_CAT_DETAIL>
            {move || match state.get() {
                ViewState::Loading => view! { <LoadingSpinner /> }.into_any(),
                ViewState::Empty => view! {
                    <NotFoundCard resource=CatalogResource::Grapes message="Uva não encontrada" />
                }
                .into_any(),
                ViewState::Ready(detail) => view! { <GrapeDetailBody detail=detail /> }.into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn GrapeDetailBody(detail: GrapeDetail) -> impl IntoView {
    let GrapeDetail { grape, wines } = detail;
    let trail = Trail::for_detail(CatalogResource::Grapes, &grape.name);
    let color = grape.color_category();
    let characteristics = grape.characteristics_list();
    let description = grape.description.clone().unwrap_or_default();

    view! {
        <div class="page__header">
            <Breadcrumbs trail=trail />
            <PageHeader title=grape.name.clone() subtitle=grape.color.clone()>
                <Badge class=format!("badge--grape-{}", color.css_modifier())>{color.label()}</Badge>
            </PageHeader>
        </div>
        <div class="page__content">
            {(!characteristics.is_empty()).then(|| view! {
                <div class="chip-list">
                    {characteristics
                        .into_iter()
                        .map(|c| view! { <span class="chip">{c}</span> })
                        .collect_view()}
                </div>
            })}

            {(!description.is_empty()).then(|| view! {
                <div class="grape-detail__description">
                    {paragraphs(&description)
                        .into_iter()
                        .map(|p| view! { <p>{p.to_string()}</p> })
                        .collect_view()}
                </div>
            })}

            <section class="section">
                <h2 class="section__title">{format!("Vinhos com {}", grape.name)}</h2>
                {if wines.is_empty() {
                    view! { <p class="section__empty">"Nenhum vinho encontrado com esta uva."</p> }.into_any()
                } else {
                    view! { <WineGrid wines=wines /> }.into_any()
                }}
            </section>
        </div>
    }
}
