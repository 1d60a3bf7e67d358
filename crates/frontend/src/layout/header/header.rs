use contracts::domain::common::CatalogResource;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__brand">
                    <span class="header__logo">"🍷"</span>
                    <span class="header__title">"VinhoApp"</span>
                </A>
                <nav class="header__nav">
                    {CatalogResource::ALL
                        .into_iter()
                        .map(|resource| view! {
                            <A href=resource.list_route() attr:class="header__link">
                                {resource.title()}
                            </A>
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
