use contracts::shared::breadcrumbs::Trail;
use leptos::prelude::*;
use leptos_router::components::A;

/// Trail of links; the last item is plain text
#[component]
pub fn Breadcrumbs(trail: Trail) -> impl IntoView {
    let items = trail.items().to_vec();
    let last = items.len().saturating_sub(1);

    view! {
        <nav class="breadcrumbs" aria-label="breadcrumb">
            {items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let separator = (i > 0).then(|| view! { <span class="breadcrumbs__sep">"›"</span> });
                    let node = match item.href {
                        Some(href) if i != last => view! {
                            <A href=href attr:class="breadcrumbs__link">{item.label}</A>
                        }
                        .into_any(),
                        _ => view! {
                            <span class="breadcrumbs__current" aria-current="page">{item.label}</span>
                        }
                        .into_any(),
                    };
                    view! { {separator} {node} }
                })
                .collect_view()}
        </nav>
    }
}
