use contracts::shared::flags::{flag_icon_class, GLOBE_GLYPH};
use leptos::prelude::*;

/// Flag sprite for a country name; unknown names show the globe glyph
#[component]
pub fn CountryFlag(
    #[prop(into)]
    name: String,
    /// Print the name after the flag
    #[prop(optional)]
    with_name: bool,
) -> impl IntoView {
    let icon = match flag_icon_class(&name) {
        Some(class) => view! { <span class=class aria-hidden="true"></span> }.into_any(),
        None => view! { <span class="country-flag__globe">{GLOBE_GLYPH}</span> }.into_any(),
    };
    view! {
        <span class="country-flag" title=name.clone()>
            {icon}
            {with_name.then(|| view! { <span class="country-flag__name">{name}</span> })}
        </span>
    }
}
