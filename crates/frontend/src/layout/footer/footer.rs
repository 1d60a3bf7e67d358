use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <span class="footer__brand">"VinhoApp · catálogo de vinhos"</span>
            // served by the backend, so the router must not intercept it
            <a href="/sitemap.xml" rel="external" class="footer__link">"Mapa do site"</a>
        </footer>
    }
}
