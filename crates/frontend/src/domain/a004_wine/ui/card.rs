use contracts::domain::a004_wine::aggregate::Wine;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::ui::{Badge, RatingBadge};
use crate::shared::components::wine_image::WineImage;

#[component]
pub fn WineCard(wine: Wine) -> impl IntoView {
    let rating = wine.rating_label();
    let price = wine.price_label();
    let winery = wine.winery.as_ref().map(|w| w.name.clone());

    view! {
        <A href=wine.route() attr:class="card card--wine">
            <WineImage vivino_id=wine.vivino_id.clone() alt=wine.name.clone() class="card__image" />
            <div class="card__body">
                <h3 class="card__title">{wine.name.clone()}</h3>
                {winery.map(|w| view! { <div class="card__subtitle">{w}</div> })}
                <div class="card__meta">
                    {wine.wine_type.clone().map(|t| view! { <Badge variant="wine">{t}</Badge> })}
                    {wine.vintage.map(|v| view! { <span class="card__vintage">{v}</span> })}
                </div>
                <div class="card__footer">
                    <RatingBadge label=rating />
                    {price.map(|p| view! { <span class="card__price">{p}</span> })}
                </div>
            </div>
        </A>
    }
}

/// Grid of wine cards in the order given
#[component]
pub fn WineGrid(wines: Vec<Wine>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {wines.into_iter().map(|wine| view! { <WineCard wine=wine /> }).collect_view()}
        </div>
    }
}
