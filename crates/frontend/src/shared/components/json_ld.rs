use contracts::seo::json_ld::to_script_body;
use leptos::prelude::*;

/// `<script type="application/ld+json">` block
#[component]
pub fn JsonLdScript(data: serde_json::Value) -> impl IntoView {
    let body = to_script_body(&data);
    view! { <script type="application/ld+json" inner_html=body></script> }
}
