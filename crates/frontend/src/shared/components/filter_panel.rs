use contracts::domain::a004_wine::aggregate::WINE_TYPES;
use contracts::pages::list::{sort_options, ListQuery};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Search box, sort selector and, on the wine list, the type selector.
///
/// Every edit writes straight into `query`; the list page refetches on
/// each change.
#[component]
pub fn FilterPanel(
    query: RwSignal<ListQuery>,
    #[prop(into)]
    search_placeholder: String,
    /// Show the wine type selector
    #[prop(optional)]
    with_wine_type: bool,
) -> impl IntoView {
    let resource = query.with_untracked(|q| q.resource);
    let active_filters_count = move || {
        query.with(|q| {
            usize::from(!q.search_term.is_empty()) + usize::from(!q.wine_type.is_empty())
        })
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel__field filter-panel__field--search">
                {icon("search")}
                <input
                    type="search"
                    class="filter-panel__input"
                    placeholder=search_placeholder
                    prop:value=move || query.with(|q| q.search_term.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.search_term = value);
                    }
                />
            </div>

            {with_wine_type.then(|| view! {
                <select
                    class="filter-panel__select"
                    prop:value=move || query.with(|q| q.wine_type.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.wine_type = value);
                    }
                >
                    <option value="">"Todos os tipos"</option>
                    {WINE_TYPES
                        .iter()
                        .map(|&t| view! { <option value=t>{t}</option> })
                        .collect_view()}
                </select>
            })}

            <select
                class="filter-panel__select"
                prop:value=move || query.with(|q| q.sort_key.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.sort_key = value);
                }
            >
                {sort_options(resource)
                    .iter()
                    .map(|o| view! { <option value=o.value>{o.label}</option> })
                    .collect_view()}
            </select>

            {move || {
                let count = active_filters_count();
                (count > 0).then(|| view! {
                    <button
                        class="button button--ghost"
                        on:click=move |_| query.update(|q| *q = q.cleared())
                    >
                        {icon("filter")}
                        <span class="badge badge--primary">{count}</span>
                        "Limpar"
                    </button>
                })
            }}
        </div>
    }
}
