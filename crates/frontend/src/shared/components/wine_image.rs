use contracts::shared::media::WINE_PLACEHOLDER_GLYPH;
use leptos::prelude::*;

use crate::shared::api_utils::image_url_for;

/// Bottle photo, or the placeholder glyph when there is no image or it fails
/// to load
#[component]
pub fn WineImage(
    vivino_id: Option<String>,
    #[prop(into)]
    alt: String,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let src = image_url_for(vivino_id.as_deref());
    let broken = RwSignal::new(false);
    let class = format!("wine-image {}", class);

    view! {
        <div class=class>
            {move || match src.clone() {
                Some(url) if !broken.get() => view! {
                    <img
                        class="wine-image__img"
                        src=url
                        alt=alt.clone()
                        loading="lazy"
                        on:error=move |_| broken.set(true)
                    />
                }
                .into_any(),
                _ => view! {
                    <span class="wine-image__placeholder">{WINE_PLACEHOLDER_GLYPH}</span>
                }
                .into_any(),
            }}
        </div>
    }
}
