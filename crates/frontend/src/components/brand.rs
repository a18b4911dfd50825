//! Branding header: logo, title and tagline.

use web_types::APP_NAME;
use yew::prelude::*;

const LOGO_URL: &str = "https://cdn.discordapp.com/emojis/1045021806144262244.webp?size=80";

/// Properties for Brand component.
#[derive(Properties, PartialEq)]
pub struct BrandProps {
    #[prop_or(AttrValue::Static(APP_NAME))]
    pub title: AttrValue,
    #[prop_or_default]
    pub tagline: Option<AttrValue>,
}

/// Brand header component.
#[function_component(Brand)]
pub fn brand(props: &BrandProps) -> Html {
    html! {
        <header class="brand">
            <img class="brand-logo" src={LOGO_URL} alt="Kekstarter Logo" width="64" height="64" />
            <h1 class="brand-title">{ props.title.clone() }</h1>
            if let Some(tagline) = &props.tagline {
                <p class="text-secondary brand-tagline">{ tagline.clone() }</p>
            }
        </header>
    }
}
