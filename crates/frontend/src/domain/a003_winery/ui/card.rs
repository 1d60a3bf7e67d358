use contracts::domain::a003_winery::aggregate::Winery;
use contracts::shared::text::{pluralize, truncate_chars};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::country_flag::CountryFlag;

const CARD_DESCRIPTION_CHARS: usize = 140;

#[component]
pub fn WineryCard(winery: Winery) -> impl IntoView {
    let region = winery.region_name().map(str::to_string);
    let country = winery.country_name().map(str::to_string);
    let description = winery
        .description
        .as_deref()
        .map(|d| truncate_chars(d, CARD_DESCRIPTION_CHARS));
    let wines = winery
        .wines_count
        .map(|n| pluralize(n as usize, "vinho", "vinhos"));

    view! {
        <A href=winery.route() attr:class="card card--winery">
            <div class="card__body">
                <h3 class="card__title">{winery.name.clone()}</h3>
                <div class="card__subtitle">
                    {country.map(|c| view! { <CountryFlag name=c /> })}
                    {region}
                </div>
                {description.map(|d| view! { <p class="card__text">{d}</p> })}
                <div class="card__footer">
                    {winery.established_year.map(|y| view! { <span class="card__since">{format!("Desde {}", y)}</span> })}
                    {wines.map(|w| view! { <span class="card__count">{w}</span> })}
                </div>
            </div>
        </A>
    }
}

#[component]
pub fn WineryGrid(wineries: Vec<Winery>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {wineries.into_iter().map(|winery| view! { <WineryCard winery=winery /> }).collect_view()}
        </div>
    }
}
