use leptos::prelude::*;

/// Shown for an empty result and for a failed fetch alike
#[component]
pub fn EmptyState(
    #[prop(into)]
    message: String,
    /// Adds a "Limpar filtros" button
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">"🔍"</div>
            <p class="empty-state__message">{message}</p>
            {on_clear.map(|cb| view! {
                <button class="button button--secondary" on:click=move |_| cb.run(())>
                    "Limpar filtros"
                </button>
            })}
        </div>
    }
}
