use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="loading__spinner"></div>
            <span class="loading__label">{label.unwrap_or_else(|| "Carregando...".to_string())}</span>
        </div>
    }
}
