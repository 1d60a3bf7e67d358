use contracts::domain::common::CatalogResource;
use leptos::prelude::*;
use leptos_router::components::A;

/// Card for an unknown slug or a failed detail fetch
#[component]
pub fn NotFoundCard(
    resource: CatalogResource,
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="not-found">
            <h2 class="not-found__title">{message}</h2>
            <A href=resource.list_route() attr:class="button button--primary">
                {format!("Ver {}", resource.title().to_lowercase())}
            </A>
        </div>
    }
}
