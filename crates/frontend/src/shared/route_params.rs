use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// `:slug` of the current route; empty when absent
pub fn use_slug() -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()))
}
