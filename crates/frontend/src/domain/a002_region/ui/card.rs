use contracts::domain::a002_region::aggregate::Region;
use contracts::shared::text::{pluralize, truncate_chars};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::country_flag::CountryFlag;

#[component]
pub fn RegionCard(region: Region) -> impl IntoView {
    let country = region.country_name().map(str::to_string);
    let description = region.description.as_deref().map(|d| truncate_chars(d, 120));
    let wineries = region
        .winery_total()
        .map(|n| pluralize(n as usize, "vinícola", "vinícolas"));
    let wines = region
        .wine_total()
        .map(|n| pluralize(n as usize, "vinho", "vinhos"));

    view! {
        <A href=region.route() attr:class="card card--region">
            <div class="card__body">
                <h3 class="card__title">{region.name.clone()}</h3>
                {country.map(|c| view! {
                    <div class="card__subtitle"><CountryFlag name=c with_name=true /></div>
                })}
                {description.map(|d| view! { <p class="card__text">{d}</p> })}
                <div class="card__footer">
                    {wineries.map(|w| view! { <span class="card__count">{w}</span> })}
                    {wines.map(|w| view! { <span class="card__count">{w}</span> })}
                </div>
            </div>
        </A>
    }
}

#[component]
pub fn RegionGrid(regions: Vec<Region>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {regions.into_iter().map(|region| view! { <RegionCard region=region /> }).collect_view()}
        </div>
    }
}
